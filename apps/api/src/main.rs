//! # GameVault API Server
//!
//! REST server for the GameVault storefront.
//!
//! ## Startup Sequence
//! ```text
//! load .env ──► init tracing ──► load config ──► connect SQLite
//!      ──► run migrations ──► prepare content dir ──► serve
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gamevault_api::config::ApiConfig;
use gamevault_api::router::router;
use gamevault_api::state::AppState;
use gamevault_db::{Database, DbConfig};
use gamevault_media::FsBlobStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting GameVault API server...");

    let config = ApiConfig::load()?;
    info!(
        port = config.http_port,
        db = %config.database_path.display(),
        content = %config.content_dir.display(),
        "Configuration loaded"
    );

    // Connect to the database; migrations run as part of the pool setup.
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Connected to SQLite, migrations complete");

    // Prepare the banner content directory.
    let blobs = FsBlobStore::new(&config.content_dir).await?;

    let state = AppState::new(db, Arc::new(blobs));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl-C handler");
    }
    info!("Shutdown signal received");
}
