//! HTTP error mapping for the log gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use log_gateway_repository::LogIndexError;

/// Error wrapper for converting log index errors to HTTP responses.
///
/// A missing document maps to 404. Every backend failure maps to 500.
/// Bodies have the format:
/// ```json
/// { "status": "error", "message": "..." }
/// ```
pub struct ApiError(pub LogIndexError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LogIndexError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Backend request failed");
        }

        let body = serde_json::json!({
            "status": "error",
            "message": self.0.to_string()
        });

        (status, Json(body)).into_response()
    }
}

impl From<LogIndexError> for ApiError {
    fn from(err: LogIndexError) -> Self {
        ApiError(err)
    }
}
