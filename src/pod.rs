//! Pod identity resolution.
//!
//! The pod name tells a client which replica answered. It is resolved exactly
//! once at startup and then handed to the request handler by value.

use std::ffi::OsString;
use std::fmt;

use crate::config::POD_NAME_ENV_VAR;

/// Where the pod name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodIdentitySource {
    /// The `HOSTNAME` environment override
    Override,
    /// The operating system's host name
    SystemHostname,
}

impl fmt::Display for PodIdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PodIdentitySource::Override => f.write_str("override"),
            PodIdentitySource::SystemHostname => f.write_str("system hostname"),
        }
    }
}

/// Immutable name of the process instance serving requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodIdentity {
    name: String,
    source: PodIdentitySource,
}

impl PodIdentity {
    /// Resolve from the `HOSTNAME` environment variable, falling back to the
    /// system host name. A value that is not UTF-8 counts as unset.
    pub fn from_env() -> Result<Self, PodIdentityError> {
        Self::resolve(std::env::var(POD_NAME_ENV_VAR).ok())
    }

    /// Resolve from an optional override, falling back to the system host name.
    pub fn resolve(override_value: Option<String>) -> Result<Self, PodIdentityError> {
        Self::resolve_with(override_value, gethostname::gethostname)
    }

    /// Resolve with an explicit host name lookup.
    ///
    /// An override wins when present and non-empty. The lookup is only called
    /// when the override is absent or empty.
    pub fn resolve_with<F>(
        override_value: Option<String>,
        system_hostname: F,
    ) -> Result<Self, PodIdentityError>
    where
        F: FnOnce() -> OsString,
    {
        if let Some(name) = override_value.filter(|v| !v.is_empty()) {
            return Ok(Self {
                name,
                source: PodIdentitySource::Override,
            });
        }

        let name = system_hostname()
            .into_string()
            .map_err(PodIdentityError::NonUtf8Hostname)?;
        if name.is_empty() {
            return Err(PodIdentityError::EmptyHostname);
        }

        Ok(Self {
            name,
            source: PodIdentitySource::SystemHostname,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> PodIdentitySource {
        self.source
    }
}

impl fmt::Display for PodIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PodIdentityError {
    #[error("System host name is empty")]
    EmptyHostname,
    #[error("System host name is not valid UTF-8: {0:?}")]
    NonUtf8Hostname(OsString),
}
