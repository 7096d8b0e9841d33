use axum::Router;
use configs::AppConfig;
use tracing::info;

use crate::routes::{self, build_cors};
use crate::state::ServerState;

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: open the store, ensure the schema, build the app and serve
/// until Ctrl+C. Logging and config are resolved by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_env(&cfg.database.url).await?;

    // DB connection + schema; either failing aborts startup
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    models::db::init_schema(&db).await?;

    let state = ServerState { db };
    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
