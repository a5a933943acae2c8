//! Handler for per-link click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count of a short link.
///
/// # Endpoint
///
/// `GET /{short_id}/analytics`
///
/// Reading analytics never counts as a click.
///
/// # Response
///
/// ```json
/// { "short_id": "a1b2c3", "click_count": 1 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn analytics_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    tracing::info!(short_id = %short_id, "Analytics request");

    let analytics = state.shortener.analytics(&short_id)?;

    Ok(Json(analytics.into()))
}
