//! Shared application state for request handlers.

use std::sync::Arc;

use crate::handler::RequestHandler;

/// Shared application state, cloneable across handlers.
///
/// The request handler is immutable after startup, so one `Arc` serves
/// every concurrent request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    pub fn new(handler: RequestHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}
