//! Configuration loading and constants.
//!
//! Loads the listener and logging settings from an optional TOML file and
//! defines the constants shared by the server: default bind address, log
//! filter, response headers and the pod override variable. Every field has a
//! default, so the service runs without any configuration file at all.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path, used only when it exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default bind address, for help output
pub const DEFAULT_BIND_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

/// Seconds to wait for in-flight requests after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str =
    formatcp!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME"));

// =============================================================================
// Pod identity
// =============================================================================

/// Environment variable that overrides the system host name as pod identity
pub const POD_NAME_ENV_VAR: &str = "HOSTNAME";

// =============================================================================
// HTTP headers
// =============================================================================

/// Header carrying the request correlation id, in and out
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Responses name the replica that produced them, so nothing may be cached
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Graceful shutdown window in seconds
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// Parse `host:port` into the address the listener binds.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port ({}:{}): {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from an explicit path, or from [`DEFAULT_CONFIG_PATH`] when it
    /// exists, or fall back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.http.socket_addr()?;

        if self.http.shutdown_grace_seconds == 0 {
            return Err(ConfigError::Validation(
                "http.shutdown_grace_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
