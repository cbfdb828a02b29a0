//! HTTP route handlers.
//!
//! Each handler is a thin axum adapter over one `RequestHandler` operation.
//! Every response carries `Cache-Control: no-store` because its body names the
//! replica that produced it, and the request ID middleware wraps everything so
//! diagnostic lines share the request's span. Trailing slashes are trimmed
//! before routing, so `/health/` is still the liveness probe.

pub mod fallback;
pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::normalize_path::NormalizePath;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Static segment takes precedence over the name capture
    let health_routes = Router::new().route("/health", get(health::health));

    let greeting_routes = Router::new()
        .route("/", get(greeting::root))
        .route("/{name}", get(greeting::by_name));

    let app = Router::new()
        .merge(health_routes)
        .merge(greeting_routes)
        .fallback(fallback::not_found)
        // Must follow the merges: it only covers routes registered so far
        .method_not_allowed_fallback(fallback::not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer));

    // Layers on the router itself run after route matching; trim from outside
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(app))
}
