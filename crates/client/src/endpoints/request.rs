//! Request dispatch and error mapping for REST calls.
//!
//! Requests are sent exactly once. A failed request is surfaced to the caller
//! as-is; rerunning a search is the caller's decision.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Send a request and turn non-success statuses into [`ClientError::ApiError`].
///
/// `endpoint` is the templated path (e.g. `/services/search/jobs/{sid}`) used
/// for logging, so sids and queries stay out of the log line.
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    debug!(endpoint, method, "Sending request");
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(endpoint, method, status, "Request failed");

    // Try to parse Splunk error messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m
            .messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; "),
        _ => body,
    };

    if status == 404 {
        return Err(ClientError::NotFound(format!("{} ({})", url, message)));
    }

    Err(ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    })
}
