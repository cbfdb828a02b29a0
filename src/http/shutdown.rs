//! Graceful shutdown on SIGTERM and SIGINT.

use std::time::Duration;

use axum_server::Handle;

/// Resolves when Ctrl+C or SIGTERM arrives, naming the signal.
///
/// A signal whose handler cannot be installed never fires; the other one still
/// works.
async fn wait_for_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    }
}

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received the server stops accepting connections and
/// waits up to `grace` for in-flight requests before closing the rest.
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(async move {
        let signal = wait_for_signal().await;
        tracing::info!(signal, "Received shutdown signal, initiating graceful shutdown");

        handle.graceful_shutdown(Some(grace));
        tracing::info!(
            grace_secs = grace.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}
