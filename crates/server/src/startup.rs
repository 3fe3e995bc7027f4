use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad listen address: {e}")))
}

/// Connect the store, make sure the table exists and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    runtime::ensure_env(&cfg.assets.static_dir, cfg.database.sqlite_path())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::init_schema(&db).await?;

    let state = ServerState::from_db(db);
    Ok(routes::build_router(state, build_cors(), &cfg.assets.static_dir))
}

/// Serve with an already loaded configuration.
pub async fn serve(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, static_dir = %cfg.assets.static_dir, "reservation server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: load `.env` and configuration, then run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    serve(cfg).await?;
    Ok(())
}
