//! pod-greeter: a greeting service that reports which pod answered.
//!
//! The pod identity is resolved once at startup (see [`pod`]) and injected
//! into a [`handler::RequestHandler`], which the axum router in [`routes`]
//! shares across all requests.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod greeting;
pub mod handler;
pub mod http;
pub mod middleware;
pub mod pod;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use handler::{GreetingResponse, HealthResponse, RequestHandler};
pub use pod::PodIdentity;
pub use routes::create_router;
pub use state::AppState;
