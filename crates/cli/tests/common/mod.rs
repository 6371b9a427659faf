//! Shared test utilities for splunk-search CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point the CLI at a wiremock server through the `SPLUNK_*` variables.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `SPLUNK_TOKEN` is set to "test-token" unless overridden.

#![allow(dead_code)]

use assert_cmd::Command;
use wiremock::MockServer;

const CONNECTION_VARS: [&str; 8] = [
    "SPLUNK_HOST",
    "SPLUNK_PORT",
    "SPLUNK_TOKEN",
    "SPLUNK_SCHEME",
    "SPLUNK_SKIP_VERIFY",
    "SPLUNK_TIMEOUT",
    "SPLUNK_EARLIEST_TIME",
    "SPLUNK_LATEST_TIME",
];

/// Returns a hermetic `splunk-search` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Connection variables from the host are cleared.
/// - `SPLUNK_TOKEN` is set to a dummy value.
pub fn search_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-search");

    cmd.env("DOTENV_DISABLED", "1");
    for var in CONNECTION_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SPLUNK_TOKEN", "test-token");
    cmd.env("RUST_LOG", "warn");

    cmd
}

/// Returns a hermetic command whose connection targets `server` over plain HTTP.
pub fn search_cmd_for(server: &MockServer) -> Command {
    let address = server.address();
    let mut cmd = search_cmd();
    cmd.env("SPLUNK_HOST", address.ip().to_string())
        .env("SPLUNK_PORT", address.port().to_string())
        .env("SPLUNK_SCHEME", "http");
    cmd
}

/// Results payload holding `{"n": i}` rows for `range`.
pub fn results_page(range: std::ops::Range<usize>) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = range.map(|n| serde_json::json!({ "n": n })).collect();
    serde_json::json!({ "messages": [], "results": rows })
}
