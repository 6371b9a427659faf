//! Connection configuration for Splunk searches.
//!
//! This crate provides the partial, mergeable [`ConnectionSettings`] used to
//! accumulate configuration from the environment and explicit overrides, the
//! validated [`ConnectionConfig`] they resolve into, and the workspace-wide
//! default constants.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, env_var_or_none, load_dotenv, settings_from_env};
pub use types::{ConnectionConfig, ConnectionSettings};
