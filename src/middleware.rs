//! Request ID middleware for correlating logs with requests.
//!
//! Reuses a caller-supplied `x-request-id` when it is a valid UUID, otherwise
//! generates a UUID v4. The id wraps the whole request in a tracing span and
//! is echoed back on the response so clients can quote it.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use axum::http::header::HeaderValue;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Request id from the inbound header, if it parses as a UUID.
fn inbound_request_id(request: &Request) -> Option<Uuid> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
}

/// Middleware that assigns a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = inbound_request_id(&request).unwrap_or_else(Uuid::new_v4);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
