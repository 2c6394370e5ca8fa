//! 应用层：路由与共享状态

pub mod products;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::State,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::HttpConfig;
use crate::core::{
    error::{handle_middleware_error, CoreError},
    middleware::request_logging_middleware,
};
use products::{handler, ProductService};

#[derive(Clone, Default)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub timestamp: String,
}

/// 构建完整路由
pub fn build_router(state: AppState, config: &HttpConfig) -> Router {
    let router = Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route("/health", get(health_check))
        .fallback(not_found);
    let router = with_middleware(router, Duration::from_secs(config.timeout_seconds))
        .with_state(state);

    if config.cors_allow_any_origin {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

/// 请求追踪、请求日志与超时控制；超时以统一错误体返回 408
fn with_middleware<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(timeout),
    )
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        products: state.product_service.product_count(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn not_found() -> CoreError {
    CoreError::NotFound("请求的资源不存在".to_string())
}
