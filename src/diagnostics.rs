//! Diagnostic log capability injected into the request handler.
//!
//! Handlers never write to the console directly. Production code forwards
//! lines to `tracing`, so they inherit the current request span; tests swap in
//! [`RecordingLog`] and assert on what was written.

use std::sync::{Mutex, PoisonError};

/// Sink for one-line diagnostic messages.
pub trait DiagnosticLog: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Forwards diagnostic lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "pod_greeter::diagnostics", "{}", line);
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticLog for RecordingLog {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// Drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl DiagnosticLog for NullLog {
    fn write_line(&self, _line: &str) {}
}
