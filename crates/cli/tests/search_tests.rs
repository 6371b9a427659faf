//! Integration tests for the search command.
//!
//! Each test runs the real binary against a wiremock server and checks what
//! reaches stdout.

mod common;

use common::{results_page, search_cmd_for};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SID: &str = "1700000000.77";

async fn mount_finished_job(server: &MockServer, result_count: usize) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sid": SID })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{SID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entry": [{"content": {
                "sid": SID,
                "dispatchState": "DONE",
                "isDone": true,
                "doneProgress": 1.0,
                "resultCount": result_count
            }}]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_normal_search_streams_ndjson() {
    let server = MockServer::start().await;
    mount_finished_job(&server, 3).await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{SID}/results")))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(0..3)))
        .expect(1)
        .mount(&server)
        .await;

    search_cmd_for(&server)
        .args(["search index=main", "--poll-interval", "0"])
        .assert()
        .success()
        .stdout("{\"n\":0}\n{\"n\":1}\n{\"n\":2}\n");
}

#[tokio::test]
async fn test_json_format_emits_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/oneshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(0..2)))
        .expect(1)
        .mount(&server)
        .await;

    let output = search_cmd_for(&server)
        .args(["search index=main", "--exec-mode", "oneshot", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed, json!([{"n": 0}, {"n": 1}]));
}

#[tokio::test]
async fn test_limit_stops_before_next_page() {
    let server = MockServer::start().await;
    mount_finished_job(&server, 10).await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{SID}/results")))
        .and(query_param("offset", "0"))
        .and(query_param("count", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(0..5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{SID}/results")))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(5..10)))
        .expect(0)
        .mount(&server)
        .await;

    search_cmd_for(&server)
        .args([
            "search index=main",
            "--batch-size",
            "5",
            "--limit",
            "2",
            "--poll-interval",
            "0",
        ])
        .assert()
        .success()
        .stdout("{\"n\":0}\n{\"n\":1}\n");
}

#[tokio::test]
async fn test_params_and_times_are_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/oneshot"))
        .and(body_string_contains("earliest_time=-15m"))
        .and(body_string_contains("adhoc_search_level=fast"))
        .and(body_string_contains("max_count=7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(0..1)))
        .expect(1)
        .mount(&server)
        .await;

    search_cmd_for(&server)
        .env("SPLUNK_EARLIEST_TIME", "-15m")
        .args([
            "search index=main",
            "-m",
            "oneshot",
            "--search-level",
            "fast",
            "--param",
            "max_count=7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"n\":0}"));
}

#[tokio::test]
async fn test_explicit_flags_override_environment() {
    let server = MockServer::start().await;
    let address = server.address();

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/oneshot"))
        .and(header("Authorization", "Bearer flag-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(0..1)))
        .expect(1)
        .mount(&server)
        .await;

    common::search_cmd()
        .env("SPLUNK_HOST", "unreachable.invalid")
        .args([
            "search index=main",
            "-m",
            "oneshot",
            "--host",
            &address.ip().to_string(),
            "--port",
            &address.port().to_string(),
            "--scheme",
            "http",
            "--token",
            "flag-token",
        ])
        .assert()
        .success();
}

#[tokio::test]
async fn test_dispatch_log_names_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/search/jobs/oneshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(0..1)))
        .expect(1)
        .mount(&server)
        .await;

    search_cmd_for(&server)
        .env("RUST_LOG", "info")
        .args(["search index=web status=500", "--exec-mode", "oneshot"])
        .assert()
        .success()
        .stdout("{\"n\":0}\n")
        .stderr(predicate::str::contains(
            "Dispatching oneshot search: search index=web status=500",
        ));
}
