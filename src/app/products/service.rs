//! 产品业务服务

use std::sync::Arc;

use tracing::{info, warn};

use super::model::{Payload, Product, FIELD_NAME};
use super::store::ProductStore;
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct ProductService {
    store: Arc<ProductStore>,
}

impl ProductService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    pub fn create_product(&self, payload: Payload) -> Result<Product, CoreError> {
        match self.store.submit(payload) {
            Ok(product) => {
                let name = product.get(FIELD_NAME).and_then(|v| v.as_str()).unwrap_or_default();
                info!(product_id = product.id(), name, "产品已添加");
                Ok(product)
            }
            Err(e) => {
                warn!(error = %e, "产品提交被拒绝");
                Err(e.into())
            }
        }
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list_all()
    }

    pub fn product_count(&self) -> usize {
        self.store.len()
    }
}
