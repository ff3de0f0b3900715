//! HTTP request handlers for the log API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use log_gateway_shared::Log;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Log gateway is running")
}

/// POST /api/log - index a log under its id and return what the backend stored.
///
/// Responds 201 with the re-fetched document, or `null` if the backend has not
/// made it visible yet.
pub async fn create_log(
    State(state): State<AppState>,
    Json(log): Json<Log>,
) -> Result<(StatusCode, Json<Option<Log>>), ApiError> {
    info!(id = %log.id, "Received create request");
    let stored = state.service.create(log).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/log - every log returned by an unfiltered search.
pub async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<Log>>, ApiError> {
    let logs = state.service.list().await?;
    Ok(Json(logs))
}

/// DELETE /api/log/:id - 200 when deleted, 404 when no log has this id.
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!(id = %id, "Received delete request");
    state.service.delete(&id).await?;
    Ok(StatusCode::OK)
}
