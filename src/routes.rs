//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                      - Service index
//! - `POST /shorten`               - Create a short link (rate limited)
//! - `GET  /{short_id}`            - Short link redirect
//! - `GET  /{short_id}/analytics`  - Click count
//! - `GET  /{short_id}/qr`         - QR code PNG
//! - `GET  /health`                - Overall status
//! - `GET  /health/status`         - Status, uptime, components
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on link creation
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::tracing;
use crate::api::routes::{public_routes, shorten_routes};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds every route with its middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(shorten_routes())
        .merge(public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/a1b2c3/` redirects
/// like `/a1b2c3`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
