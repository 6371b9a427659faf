//! Search job operations.
//!
//! This module provides the REST calls behind a search: creating a job,
//! running a oneshot search, reading a job's status, and fetching results.
//!
//! # What this module handles:
//! - Creating search jobs and extracting their sid
//! - Getting job status (including the "not ready yet" answer)
//! - Retrieving a window of search results
//!
//! # What this module does NOT handle:
//! - Polling until completion (see [`crate::monitor`])
//! - Pagination (see [`crate::search`])

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::endpoints::send_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{JobState, JobStatus};
use crate::reader::ResultsReader;

use super::types::{JobRequest, ResultsPage};

/// Create a new search job and return its sid.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
    request: &JobRequest,
) -> Result<String> {
    debug!("Creating search job");

    let url = format!("{}/services/search/jobs", base_url);
    let form_data = request.form_params(query);
    for (key, value) in form_data.iter().filter(|(k, _)| k != "search") {
        debug!("  {}: {}", key, value);
    }

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .form(&form_data);
    let response = send_request(builder, "/services/search/jobs", "POST").await?;
    let body = response.text().await?;

    extract_sid(&body)
}

/// Run a oneshot search; the response body already holds the results.
pub async fn oneshot(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
    request: &JobRequest,
) -> Result<ResultsReader> {
    debug!("Running oneshot search");

    let url = format!("{}/services/search/jobs/oneshot", base_url);
    let mut form_data = request.form_params(query);
    // The response of a oneshot is the result set; it must be parseable
    // and complete unless the caller explicitly asked otherwise.
    form_data.retain(|(k, _)| k != "output_mode");
    form_data.push(("output_mode".to_string(), "json".to_string()));
    if !request.has_extra("count") {
        form_data.push(("count".to_string(), "0".to_string()));
    }

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .form(&form_data);
    let response = send_request(builder, "/services/search/jobs/oneshot", "POST").await?;
    let body = response.text().await?;

    ResultsReader::from_body(&body)
}

/// Get the status of a search job.
///
/// A `204 No Content` answer and the QUEUED/PARSING dispatch states both
/// mean the job exists but cannot report progress yet.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
) -> Result<JobState> {
    debug!("Getting status for job: {}", sid);

    let encoded_sid = encode_path_segment(sid);
    let url = format!("{}/services/search/jobs/{}", base_url, encoded_sid);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("output_mode", "json")]);
    let response = send_request(builder, "/services/search/jobs/{sid}", "GET").await?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(JobState::NotReady);
    }

    let resp: Value = response.json().await?;
    let content = extract_entry_content(&resp)?;
    let status: JobStatus = serde_json::from_value(content.clone())
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e)))?;

    Ok(JobState::from_status(status))
}

/// Get a window of results from a finished job, always as JSON.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    page: ResultsPage,
) -> Result<ResultsReader> {
    debug!(
        "Getting results for job: {} (count={}, offset={})",
        sid, page.count, page.offset
    );

    let encoded_sid = encode_path_segment(sid);
    let url = format!("{}/services/search/jobs/{}/results", base_url, encoded_sid);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[
            ("output_mode", "json".to_string()),
            ("count", page.count.to_string()),
            ("offset", page.offset.to_string()),
        ]);
    let response = send_request(builder, "/services/search/jobs/{sid}/results", "GET").await?;
    let body = response.text().await?;

    ResultsReader::from_body(&body)
}

fn extract_entry_content(resp: &Value) -> Result<&Value> {
    resp.get("entry")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("content"))
        .ok_or_else(|| ClientError::InvalidResponse("Missing entry content".to_string()))
}

/// Find the sid in a job creation response.
///
/// Splunk answers with `{"sid": ...}`, with `{"entry": [{"content": {"sid": ...}}]}`,
/// or with an XML `<response><sid>...</sid></response>` document depending on
/// version and output mode.
fn extract_sid(body: &str) -> Result<String> {
    if let Ok(resp) = serde_json::from_str::<Value>(body) {
        let sid = resp
            .get("sid")
            .and_then(|v| v.as_str())
            .or_else(|| {
                resp.get("entry")?
                    .get(0)?
                    .get("content")?
                    .get("sid")?
                    .as_str()
            });
        if let Some(sid) = sid {
            return Ok(sid.to_string());
        }
    } else if let Some(sid) = xml_sid(body) {
        return Ok(sid);
    }

    Err(ClientError::InvalidResponse(
        "Missing sid in response".to_string(),
    ))
}

fn xml_sid(body: &str) -> Option<String> {
    let start = body.find("<sid>")? + "<sid>".len();
    let len = body[start..].find("</sid>")?;
    let sid = body[start..start + len].trim();
    (!sid.is_empty()).then(|| sid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sid_top_level() {
        assert_eq!(extract_sid(r#"{"sid": "1700000000.1"}"#).unwrap(), "1700000000.1");
    }

    #[test]
    fn test_extract_sid_entry_content() {
        let body = r#"{"entry": [{"content": {"sid": "scheduler__admin__search"}}]}"#;
        assert_eq!(extract_sid(body).unwrap(), "scheduler__admin__search");
    }

    #[test]
    fn test_extract_sid_xml() {
        let body = "<?xml version=\"1.0\"?>\n<response>\n  <sid>1700000000.7</sid>\n</response>";
        assert_eq!(extract_sid(body).unwrap(), "1700000000.7");
    }

    #[test]
    fn test_extract_sid_missing() {
        let err = extract_sid(r#"{"messages": []}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));

        let err = extract_sid("<response></response>").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
