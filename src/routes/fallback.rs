//! Response for paths no route matches.

use axum::http::{Method, Uri};

use crate::error::AppError;

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
