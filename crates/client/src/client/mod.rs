//! Splunk REST API client.
//!
//! This module provides [`SplunkClient`], the HTTP implementation of
//! [`crate::backend::SearchBackend`], and [`RemoteJob`], its job handle.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Backend trait implementations
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Polling and pagination (see [`crate::monitor`] and [`crate::search`])
//!
//! # Invariants
//! - Authentication is a static bearer token; there is no session refresh.
//! - Requests are never retried.

pub mod builder;
mod search;

use secrecy::{ExposeSecret, SecretString};

pub use search::RemoteJob;

/// Splunk REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use splunk_search::SplunkClient;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .token("my-token")
///     .build()?;
/// ```
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn auth_token(&self) -> &str {
        self.token.expose_secret()
    }
}
