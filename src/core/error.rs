//! 核心错误处理模块

use axum::{
    extract::rejection::JsonRejection,
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app::products::ProductError;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    MissingFields(String),
    InvalidType(String),
    NotFound(String),
    Timeout,
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            CoreError::MissingFields(msg) => (StatusCode::BAD_REQUEST, "MISSING_FIELDS", msg),
            CoreError::InvalidType(msg) => (StatusCode::BAD_REQUEST, "INVALID_TYPE", msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "TIMEOUT",
                "请求超时".to_string(),
            ),
            CoreError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                msg,
            ),
        }
    }
}

impl From<ProductError> for CoreError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::MissingFields => CoreError::MissingFields(err.to_string()),
            ProductError::InvalidType => CoreError::InvalidType(err.to_string()),
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

/// 中间件错误处理：超时映射为 408，其它错误映射为 500
pub async fn handle_middleware_error(err: BoxError) -> CoreError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("请求处理超时");
        CoreError::Timeout
    } else {
        tracing::error!("中间件内部错误: {}", err);
        CoreError::InternalServerError(format!("内部错误: {}", err))
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_code, user_message) = self.parts();

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
