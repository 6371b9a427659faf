//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration failures.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, keys).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Token values never appear in error messages.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading and resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required settings are absent after merging all sources.
    #[error(
        "Missing required Splunk configuration: {}. Set them via configure() or the SPLUNK_HOST / SPLUNK_TOKEN environment variables.",
        .0.join(", ")
    )]
    MissingSettings(Vec<&'static str>),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
