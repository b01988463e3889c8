//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, cache and upstream client
//! setup, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::MemoryCache;
use crate::infrastructure::persistence::{connect, run_migrations};
use crate::infrastructure::upstream::ReqwestTransport;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - In-memory response cache (process lifetime)
/// - Upstream HTTP transport
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open favorites database")?;
    tracing::info!("Connected to database");

    run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;

    let cache = Arc::new(MemoryCache::new(config.cache_ttl_seconds));
    let transport =
        Arc::new(ReqwestTransport::new().context("Failed to build upstream HTTP client")?);

    let state = AppState::new(
        Arc::new(pool),
        transport,
        cache,
        &config.upstream_base_url,
        config.cache_ttl_seconds,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
