//! 产品管理

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use model::{NewProduct, Payload, Product, ProductError};
pub use service::ProductService;
pub use store::ProductStore;
