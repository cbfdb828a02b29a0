//! Greeting endpoints.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::instrument;

use crate::error::AppError;
use crate::handler::GreetingResponse;
use crate::state::AppState;

/// `GET /`
#[instrument(name = "greeting::root", skip(state))]
pub async fn root(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(state.handler.handle_root())
}

/// `GET /{name}`. The router has already percent-decoded `name`.
#[instrument(name = "greeting::by_name", skip(state))]
pub async fn by_name(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<GreetingResponse>, AppError> {
    let Path(name) = name.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(Json(state.handler.handle_greeting(&name)))
}
