//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (optional timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (see [`crate::endpoints`])
//! - Reading configuration from the environment (see `splunk_search_config`)
//!
//! # Invariants
//! - `base_url` and `token` must be provided before calling `build()`
//! - The base URL never has a trailing slash
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;
use splunk_search_config::ConnectionConfig;

use crate::client::SplunkClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SplunkClient`].
#[derive(Default)]
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    token: Option<SecretString>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the management endpoint, e.g. `https://localhost:8089`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        let token: String = token.into();
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against servers with self-signed certificates you trust.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set a whole-request timeout.
    ///
    /// Unset by default: blocking job creation and oneshot searches hold the
    /// request open until the search finishes.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Take every setting from a resolved connection configuration.
    pub fn from_config(mut self, config: &ConnectionConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.token = Some(config.token.clone());
        self.skip_verify = config.skip_verify;
        self.timeout = config.timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SplunkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if `base_url` or `token` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidArgument("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let token = self
            .token
            .ok_or_else(|| ClientError::InvalidArgument("token is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SplunkClient {
            http,
            base_url,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splunk_search_config::ConnectionSettings;

    #[test]
    fn test_from_config() {
        let config = ConnectionSettings::default()
            .with_host("splunk.example.com")
            .with_token("test-token")
            .resolve()
            .unwrap();

        let client = SplunkClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url(), "https://splunk.example.com:8089");
        assert_eq!(client.auth_token(), "test-token");
    }

    #[test]
    fn test_builder_has_no_default_timeout() {
        let builder = SplunkClient::builder();
        assert!(builder.timeout.is_none());
        let builder = builder.timeout(Duration::from_secs(5));
        assert_eq!(builder.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_build_missing_base_url() {
        let err = SplunkClient::builder().token("t").build().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_build_missing_token() {
        let err = SplunkClient::builder()
            .base_url("https://localhost:8089".to_string())
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_build_normalizes_base_url() {
        let client = SplunkClient::builder()
            .base_url("https://localhost:8089//".to_string())
            .token("t")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://localhost:8089");
    }

    #[test]
    fn test_skip_verify_with_http_url_still_builds() {
        let client = SplunkClient::builder()
            .base_url("http://localhost:8089".to_string())
            .token("t")
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }
}
