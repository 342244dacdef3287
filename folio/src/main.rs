mod config;
mod error;
mod server;

use anyhow::Context;
use config::{CacheType, Config};
use folio_infra::database::DatabaseManager;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志，RUST_LOG未设置时默认info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Folio...");

    // 加载配置
    let config = Config::load().context("failed to load configuration")?;
    info!("Configuration loaded successfully");

    // 初始化外部存储连接
    let mongodb_url = config.database.mongodb_url.as_deref();
    let redis_url = (config.cache.cache_type == CacheType::Redis).then_some(config.cache.redis_url.as_str());
    let db_manager = Arc::new(
        DatabaseManager::new(mongodb_url, redis_url)
            .await
            .map_err(error::FolioError::from)?,
    );

    // 初始化应用状态
    let app_state = server::init_app_state(&config, db_manager).await?;
    info!("Application state initialized");

    let app = server::create_router(app_state);

    // 启动HTTP服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.server.host, config.server.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(error::FolioError::from)?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
