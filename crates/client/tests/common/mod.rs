//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for exercising the client against a
//! wiremock server. Fixtures are built inline with `serde_json::json!`.

#![allow(dead_code, unused_imports)]

pub use reqwest::Client;
pub use serde_json::{Value, json};
pub use splunk_search::endpoints;
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use splunk_search::SplunkClient;

/// Token every test client authenticates with.
pub const TOKEN: &str = "test-token";

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .token(TOKEN)
        .build()
        .expect("client should build")
}

/// Job creation response in the `entry[0].content` shape.
pub fn create_job_entry(sid: &str) -> Value {
    json!({
        "links": {},
        "origin": "https://localhost:8089/services/search/jobs",
        "updated": "2024-01-15T10:30:00+00:00",
        "generator": {"build": "abc123", "version": "9.1.0"},
        "entry": [{
            "name": sid,
            "id": format!("https://localhost:8089/services/search/jobs/{sid}"),
            "content": {"sid": sid}
        }]
    })
}

/// Job status response.
pub fn job_status(sid: &str, state: &str, done: bool, progress: f64, results: usize) -> Value {
    json!({
        "entry": [{
            "name": sid,
            "content": {
                "sid": sid,
                "dispatchState": state,
                "isDone": done,
                "isFailed": false,
                "doneProgress": progress,
                "scanCount": results * 10,
                "eventCount": results,
                "resultCount": results
            }
        }]
    })
}

/// Results payload holding `{"n": i}` rows for `range`.
pub fn results_page(range: std::ops::Range<usize>) -> Value {
    let rows: Vec<Value> = range.map(|n| json!({ "n": n })).collect();
    json!({
        "preview": false,
        "init_offset": 0,
        "messages": [],
        "fields": [{"name": "n"}],
        "results": rows
    })
}
