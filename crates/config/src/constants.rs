//! Centralized constants for the Splunk search workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default URL scheme for the management port.
pub const DEFAULT_SCHEME: &str = "https";

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Default earliest time bound for searches (one day back).
pub const DEFAULT_EARLIEST_TIME: &str = "-1d";

/// Default latest time bound for searches.
pub const DEFAULT_LATEST_TIME: &str = "now";

/// Default interval between job status polls in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Default number of results fetched per pagination request.
pub const DEFAULT_BATCH_SIZE: usize = 30_000;

// =============================================================================
// Environment Variables
// =============================================================================

/// Host of the Splunk management endpoint.
pub const ENV_HOST: &str = "SPLUNK_HOST";

/// Port of the Splunk management endpoint.
pub const ENV_PORT: &str = "SPLUNK_PORT";

/// Bearer token used to authenticate.
pub const ENV_TOKEN: &str = "SPLUNK_TOKEN";

/// URL scheme (`http` or `https`).
pub const ENV_SCHEME: &str = "SPLUNK_SCHEME";

/// Whether to skip TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "SPLUNK_SKIP_VERIFY";

/// Optional HTTP request timeout in seconds; requests wait indefinitely when unset.
pub const ENV_TIMEOUT: &str = "SPLUNK_TIMEOUT";
