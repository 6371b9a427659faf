//! Environment variable parsing for connection settings.
//!
//! Responsibilities:
//! - Read and parse the `SPLUNK_*` connection variables.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Precedence between environment and explicit overrides (see
//!   `ConnectionSettings::merge`).
//! - .env file loading (see `load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::error::ConfigError;
use crate::constants::{ENV_HOST, ENV_PORT, ENV_SCHEME, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_TOKEN};
use crate::types::ConnectionSettings;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read connection settings from the environment.
///
/// Only variables that are set produce a value; everything else stays `None`
/// so the result can be merged over previously accumulated settings.
pub fn settings_from_env() -> Result<ConnectionSettings, ConfigError> {
    let mut settings = ConnectionSettings::default();

    settings.host = env_var_or_none(ENV_HOST);
    if let Some(port) = env_var_or_none(ENV_PORT) {
        let port = port
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                var: ENV_PORT.to_string(),
                message: "must be a port number between 1 and 65535".to_string(),
            })?;
        settings.port = Some(port);
    }
    settings.token = env_var_or_none(ENV_TOKEN).map(|t| SecretString::new(t.into()));
    settings.scheme = env_var_or_none(ENV_SCHEME);
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        settings.skip_verify = Some(skip.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SKIP_VERIFY.to_string(),
            message: "must be true or false".to_string(),
        })?);
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        settings.timeout = Some(Duration::from_secs(secs));
    }

    Ok(settings)
}
