//! Connection context for running searches.
//!
//! # What this module handles:
//! - Accumulating connection settings from the environment and overrides
//! - Creating the [`SplunkClient`] lazily, at most once per configuration
//!
//! # What this module does NOT handle:
//! - Running searches (see [`crate::search`])
//!
//! # Invariants
//! - `configure` never opens a connection; it only drops the cached one.
//! - Explicit overrides win over environment values.
//! - An unconfigured context falls back to the environment on first use.

use futures::stream::{self, Stream, TryStreamExt};
use splunk_search_config::{ConnectionSettings, settings_from_env};
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::client::SplunkClient;
use crate::error::Result;
use crate::query::SearchQuery;
use crate::reader::Record;
use crate::search::search;

/// Holds connection settings and the lazily created client.
#[derive(Debug, Default)]
pub struct SearchContext {
    settings: ConnectionSettings,
    client: OnceCell<SplunkClient>,
}

impl SearchContext {
    /// Create an unconfigured context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from explicit settings, without reading the environment.
    pub fn with_settings(settings: ConnectionSettings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    /// Update the accumulated connection settings.
    ///
    /// With `use_env`, the `SPLUNK_*` environment variables are merged first;
    /// `overrides` are merged last. Settings not mentioned by either source
    /// keep their previous value. Any cached connection is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::InvalidArgument`] if an environment
    /// variable holds an unparseable value.
    pub fn configure(&mut self, overrides: ConnectionSettings, use_env: bool) -> Result<()> {
        let mut updated = Vec::new();
        if use_env {
            updated.extend(self.settings.merge(settings_from_env()?));
        }
        updated.extend(self.settings.merge(overrides));
        updated.sort_unstable();
        updated.dedup();

        self.client = OnceCell::new();
        if !updated.is_empty() {
            info!("Search settings updated: {}", updated.join(", "));
        }
        Ok(())
    }

    /// The accumulated settings.
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Whether a client has been created since the last `configure`.
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// The shared client, created on first use.
    pub async fn client(&self) -> Result<&SplunkClient> {
        self.client
            .get_or_try_init(|| async { self.connect() })
            .await
    }

    fn connect(&self) -> Result<SplunkClient> {
        let settings = if self.settings.is_empty() {
            let env = settings_from_env()?;
            if env.is_empty() {
                warn!("No connection settings configured and none found in the environment");
            }
            env
        } else {
            self.settings.clone()
        };

        let config = settings.resolve()?;
        info!("Connecting to {}", config.base_url);
        SplunkClient::builder().from_config(&config).build()
    }

    /// Run `query` through this context's client.
    ///
    /// Connecting is deferred to the first poll of the stream, like the
    /// search itself.
    pub fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> impl Stream<Item = Result<Record>> + 'a {
        stream::once(self.client())
            .inspect_err(|e| error!("Could not connect to Splunk: {}", e))
            .map_ok(move |client| search(client, query))
            .try_flatten()
    }
}
