use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use inventory_service::{
    app::{
        build_router,
        products::{ProductService, ProductStore},
        AppState,
    },
    config::load_config,
    infrastructure::Logger,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数可指定配置文件路径
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, source) = load_config(config_path.as_deref())?;

    let _guard = Logger::init(&config.logging)?;
    match &source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let store = Arc::new(ProductStore::new());
    let state = AppState::new(ProductService::with_store(store));
    let app = build_router(state, &config.http);

    let http = &config.http;
    let listener = TcpListener::bind((http.bind_address.as_str(), http.port))
        .await
        .with_context(|| format!("无法绑定到 {}:{}", http.bind_address, http.port))?;

    info!("🚀 库存服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /products  - 获取全部产品");
    info!("   POST   /products  - 添加产品");
    info!("   GET    /health    - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听关闭信号失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到关闭信号，正在停止服务...");
}
