//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Serialize;
use serde_json::Value;

use super::model::Product;
use crate::app::AppState;
use crate::core::{error::CoreError, response::Created};

pub const PRODUCT_ADDED: &str = "Product added successfully";

/// 创建成功时的响应体
#[derive(Serialize)]
pub struct ProductCreated {
    pub message: String,
    pub product: Product,
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Created<ProductCreated>, CoreError> {
    let Json(body) = body?;
    let Value::Object(payload) = body else {
        return Err(CoreError::BadRequest("请求体必须是 JSON 对象".to_string()));
    };

    let product = state.product_service.create_product(payload)?;
    Ok(Created(ProductCreated {
        message: PRODUCT_ADDED.to_string(),
        product,
    }))
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_service.list_products())
}
