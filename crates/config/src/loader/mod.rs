//! Configuration loading from the environment and `.env` files.
//!
//! Responsibilities:
//! - Read Splunk connection settings from environment variables.
//! - Load `.env` files, gated by `DOTENV_DISABLED`.
//! - Define the error type for configuration failures.
//!
//! Does NOT handle:
//! - Merging settings or resolving them into a usable config (see `types`).
//! - Opening connections (see the client crate).
//!
//! Invariants / Assumptions:
//! - Explicit overrides take precedence over environment variables; the
//!   caller applies them after the environment.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod dotenv;
mod env;
mod error;

pub use dotenv::load_dotenv;
pub use env::{env_var_or_none, settings_from_env};
pub use error::ConfigError;
