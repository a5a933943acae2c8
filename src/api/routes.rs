//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    analytics_handler, health_handler, health_status_handler, index_handler, qr_handler,
    redirect_handler, shorten_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;

/// Link creation, rate limited per client IP.
///
/// - `POST /shorten` - Create a short link
pub fn shorten_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .layer(rate_limit::shorten_layer())
}

/// Public read routes.
///
/// # Endpoints
///
/// - `GET /`                       - Service index
/// - `GET /health`                 - Overall status
/// - `GET /health/status`          - Status, uptime and components
/// - `GET /{short_id}`             - Redirect to the target URL
/// - `GET /{short_id}/analytics`   - Click count
/// - `GET /{short_id}/qr`          - PNG QR code of the short URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/health/status", get(health_status_handler))
        .route("/{short_id}", get(redirect_handler))
        .route("/{short_id}/analytics", get(analytics_handler))
        .route("/{short_id}/qr", get(qr_handler))
}
