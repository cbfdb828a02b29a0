use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced to HTTP clients.
///
/// The greeting operations themselves are total; clients only see errors for
/// requests that never reach them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Cannot {method} {path}")]
    NotFound { method: String, path: String },

    /// Request could not be extracted, e.g. a path segment that is not UTF-8
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");

        let body = json!({
            "statusCode": status.as_u16(),
            "message": self.to_string(),
            "error": status.canonical_reason().unwrap_or("Error"),
        });

        (status, Json(body)).into_response()
    }
}
