//! # 内存库存服务
//!
//! 客户端提交产品记录（名称、数量、价格以及任意附加字段），服务端校验后分配
//! 自增 id 并保存在内存中，可随时查询完整的产品列表。
//! - `app`：路由、处理器、产品校验与存储
//! - `core`：统一错误响应与中间件
//! - `infrastructure`：日志
//! - `config`：TOML 配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
pub use config::{Config, ConfigError};
