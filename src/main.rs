//! pod-greeter entry point.
//!
//! Parses arguments, loads configuration, initializes tracing, resolves the
//! pod identity once, builds the router and serves until SIGTERM/SIGINT.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pod_greeter::config::{
    AppConfig, LogFormat, DEFAULT_BIND_ADDR, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER,
};
use pod_greeter::diagnostics::TracingLog;
use pod_greeter::greeting::GreetingService;
use pod_greeter::http::start_server;
use pod_greeter::{create_router, AppState, PodIdentity, RequestHandler};

/// pod-greeter: a greeting service that reports which pod answered
#[derive(Parser, Debug)]
#[command(
    name = "pod-greeter",
    version,
    about,
    after_help = const_format::formatcp!(
        "Without --config, {} is used when present; otherwise the server listens on {}.",
        DEFAULT_CONFIG_PATH,
        DEFAULT_BIND_ADDR
    )
)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "pod_greeter=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(log_filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first: it decides the log format
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(config = ?args.config, "Loaded configuration");

    // Resolved exactly once; every response reuses it
    let pod = PodIdentity::from_env()?;
    tracing::info!(pod = %pod, source = %pod.source(), "Resolved pod identity");

    let handler = RequestHandler::new(GreetingService::new(), pod, Arc::new(TracingLog));
    let app = create_router(AppState::new(handler));

    start_server(app, &config.http).await?;

    Ok(())
}
