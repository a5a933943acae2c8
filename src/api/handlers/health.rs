//! Handlers for health check endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, HealthStatusResponse};
use crate::state::AppState;

/// Returns the overall service status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy" }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: state.health.status(),
    })
}

/// Returns status, uptime and component checks.
///
/// # Endpoint
///
/// `GET /health/status`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "uptime": "0:05:12.345678",
///   "components": { "routes": "up" }
/// }
/// ```
pub async fn health_status_handler(State(state): State<AppState>) -> Json<HealthStatusResponse> {
    Json(state.health.report().into())
}
