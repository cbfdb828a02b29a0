//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it only proves the process can answer HTTP, and reports
//! which pod did.

use axum::{extract::State, Json};

use crate::handler::HealthResponse;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.handler.handle_health())
}
