//! `.env` file loading.
//!
//! Invariants:
//! - `DOTENV_DISABLED=1` or `DOTENV_DISABLED=true` skips loading entirely.
//! - A missing `.env` file is not an error.
//! - Errors never carry raw file contents.

use tracing::debug;

use super::error::ConfigError;

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// Values already present in the process environment are not overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        debug!("Skipping .env loading (DOTENV_DISABLED is set)");
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_dotenv_disabled_flag_values() {
        temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
            assert!(dotenv_disabled());
            assert!(load_dotenv().is_ok());
        });
        temp_env::with_var("DOTENV_DISABLED", Some("true"), || {
            assert!(dotenv_disabled());
        });
        temp_env::with_var("DOTENV_DISABLED", Some("no"), || {
            assert!(!dotenv_disabled());
        });
        temp_env::with_var("DOTENV_DISABLED", None::<&str>, || {
            assert!(!dotenv_disabled());
        });
    }
}
