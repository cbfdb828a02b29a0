//! HTTP server module.
//!
//! Plain HTTP listener with graceful shutdown on SIGTERM/SIGINT. TLS is
//! expected to terminate in front of the pods.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
