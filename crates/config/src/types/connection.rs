//! Connection configuration types.
//!
//! Responsibilities:
//! - Define the partial, mergeable [`ConnectionSettings`] accumulated from
//!   the environment and explicit overrides.
//! - Resolve settings into a validated [`ConnectionConfig`].
//!
//! Does NOT handle:
//! - Reading the environment (see `loader`).
//! - Actual network connections (see the client crate).
//!
//! Invariants:
//! - Merging only overwrites fields that are set in the incoming settings.
//! - `host` and `token` are required; everything else has a default.
//! - There is no default request timeout.
//! - The resolved base URL never has a trailing slash.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::constants::{DEFAULT_SCHEME, DEFAULT_SPLUNK_PORT};
use crate::loader::ConfigError;

/// Partially specified connection settings.
///
/// Every field is optional so that values from several sources can be layered
/// with [`ConnectionSettings::merge`].
#[derive(Debug, Clone, Default)]
pub struct ConnectionSettings {
    /// Host name of the Splunk management endpoint.
    pub host: Option<String>,
    /// Management port (default 8089).
    pub port: Option<u16>,
    /// Bearer token.
    pub token: Option<SecretString>,
    /// URL scheme, `https` unless set.
    pub scheme: Option<String>,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: Option<bool>,
    /// HTTP request timeout.
    pub timeout: Option<Duration>,
}

impl PartialEq for ConnectionSettings {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
            && self.port == other.port
            && self.token.as_ref().map(|t| t.expose_secret())
                == other.token.as_ref().map(|t| t.expose_secret())
            && self.scheme == other.scheme
            && self.skip_verify == other.skip_verify
            && self.timeout == other.timeout
    }
}

impl ConnectionSettings {
    /// Set the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token: String = token.into();
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.token.is_none()
            && self.scheme.is_none()
            && self.skip_verify.is_none()
            && self.timeout.is_none()
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    ///
    /// Returns the names of the fields that were taken from `other`.
    pub fn merge(&mut self, other: ConnectionSettings) -> Vec<&'static str> {
        let mut updated = Vec::new();
        if let Some(host) = other.host {
            self.host = Some(host);
            updated.push("host");
        }
        if let Some(port) = other.port {
            self.port = Some(port);
            updated.push("port");
        }
        if let Some(token) = other.token {
            self.token = Some(token);
            updated.push("token");
        }
        if let Some(scheme) = other.scheme {
            self.scheme = Some(scheme);
            updated.push("scheme");
        }
        if let Some(skip) = other.skip_verify {
            self.skip_verify = Some(skip);
            updated.push("skip_verify");
        }
        if let Some(timeout) = other.timeout {
            self.timeout = Some(timeout);
            updated.push("timeout");
        }
        updated
    }

    /// Resolve into a validated [`ConnectionConfig`].
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingSettings` listing every missing required key.
    /// - `ConfigError::InvalidValue` for an unusable scheme or host.
    pub fn resolve(&self) -> Result<ConnectionConfig, ConfigError> {
        let host = self.host.as_deref().map(str::trim).filter(|h| !h.is_empty());
        let token = self
            .token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty());

        let mut missing = Vec::new();
        if host.is_none() {
            missing.push("host");
        }
        if token.is_none() {
            missing.push("token");
        }
        let (Some(host), Some(token)) = (host, token) else {
            return Err(ConfigError::MissingSettings(missing));
        };

        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidValue {
                var: "scheme".into(),
                message: format!("must be http or https, got: {scheme}"),
            });
        }
        if host.contains("://") {
            return Err(ConfigError::InvalidValue {
                var: "host".into(),
                message: "must be a bare host name; set the scheme separately".into(),
            });
        }

        let port = self.port.unwrap_or(DEFAULT_SPLUNK_PORT);
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "port".into(),
                message: "must be a port number between 1 and 65535".into(),
            });
        }
        let raw = format!("{scheme}://{}:{port}", host.trim_end_matches('/'));
        let parsed = url::Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
            var: "host".into(),
            message: format!("does not form a valid URL ({raw}): {e}"),
        })?;
        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidValue {
                var: "host".into(),
                message: "host is required".into(),
            });
        }

        Ok(ConnectionConfig {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            token: token.clone(),
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self.timeout,
        })
    }
}

/// Fully resolved connection configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the management endpoint (e.g. `https://localhost:8089`).
    pub base_url: String,
    /// Bearer token.
    pub token: SecretString,
    /// Whether to skip TLS verification.
    pub skip_verify: bool,
    /// Whole-request timeout. `None` lets a request run until the server answers.
    pub timeout: Option<Duration>,
}
