//! Handler for the service index.

use axum::Json;

use crate::api::dto::index::IndexResponse;

/// Lists the available endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    tracing::debug!("Root endpoint accessed");
    Json(IndexResponse::default())
}
