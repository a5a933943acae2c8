//! Handler for QR code images.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Renders a PNG QR code encoding the absolute short URL.
///
/// # Endpoint
///
/// `GET /{short_id}/qr`
///
/// The link is looked up without counting a click, and the image is rendered
/// after the lookup has returned.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if rendering fails.
pub async fn qr_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(short_id = %short_id, "QR code request");

    let link = state.shortener.link(&short_id)?;
    let short_url = state.short_url(link.identifier.as_str());

    let png = state.qr.render_png(&short_url).map_err(|e| {
        tracing::error!(short_id = %short_id, "QR rendering failed: {}", e);
        AppError::internal("Failed to render QR code", json!({ "reason": e.to_string() }))
    })?;

    tracing::debug!(short_id = %short_id, bytes = png.len(), "QR code generated");

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
