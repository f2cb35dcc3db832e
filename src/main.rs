use invoice_dashboard::{create_pool, router, AppConfig, AppState, PgInvoiceStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!(
        "Starting server on {} (database: {}, tls required: {})",
        config.listen_addr(),
        config.database.redacted_url(),
        config.database.require_tls
    );

    // 创建数据库连接池
    let pool = create_pool(&config.database).await?;
    info!("Database pool created");

    let store = Arc::new(PgInvoiceStore::new(pool.clone()));
    let state = AppState::new(store)?;

    let app = router(state);

    // 启动服务器
    let addr = config.listen_addr();
    info!("Server listening on {}", addr);
    info!("Routes:");
    info!("  GET  /dashboard/invoices");
    info!("  GET  /dashboard/invoices/create    POST - create");
    info!("  GET  /dashboard/invoices/:id/edit  POST - update");
    info!("  POST /dashboard/invoices/:id/delete");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 关闭连接池
    pool.close().await;
    info!("Database pool closed, bye");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
