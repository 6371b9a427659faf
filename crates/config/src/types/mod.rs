//! Configuration type definitions.
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod connection;

pub use connection::{ConnectionConfig, ConnectionSettings};
