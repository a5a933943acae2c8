//! HTTP server initialization and runtime setup.
//!
//! Builds the link store, spawns the expiry sweeper when links have a TTL,
//! and runs the Axum server until shutdown.

use crate::config::Config;
use crate::domain::store::LinkStore;
use crate::infrastructure::MemoryLinkStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the store described by `config`.
///
/// # Errors
///
/// Returns an error if the link TTL does not fit in a [`chrono::TimeDelta`].
pub fn build_store(config: &Config) -> Result<MemoryLinkStore> {
    let generator = config.short_id_strategy.build(config.short_id_length);
    let ttl = config
        .link_ttl_seconds
        .map(|secs| {
            i64::try_from(secs)
                .ok()
                .and_then(chrono::TimeDelta::try_seconds)
                .with_context(|| format!("LINK_TTL_SECONDS is out of range: {secs}"))
        })
        .transpose()?;

    Ok(MemoryLinkStore::new(generator, config.max_insert_attempts).with_ttl(ttl))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store
/// - Expired link sweeper (only when `LINK_TTL_SECONDS` is set)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(build_store(&config)?);
    tracing::info!("Link store ready");

    if config.link_ttl_seconds.is_some() {
        tokio::spawn(run_purge_worker(
            store.clone(),
            Duration::from_secs(config.purge_interval_seconds),
        ));
        tracing::info!("Expiry sweeper started");
    }

    let state = AppState::new(store, config.base_url.clone());

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Periodically drops expired links from `store`.
async fn run_purge_worker(store: Arc<MemoryLinkStore>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    loop {
        interval.tick().await;
        let removed = store.purge_expired();
        if removed > 0 {
            tracing::info!(removed, "Purged expired short links");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
