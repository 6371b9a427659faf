//! [`SearchBackend`] implementation for [`SplunkClient`].

use tracing::debug;

use crate::backend::{SearchBackend, SearchJob};
use crate::client::SplunkClient;
use crate::endpoints::search::{self as endpoints, JobRequest, ResultsPage};
use crate::error::{ClientError, Result};
use crate::models::JobState;
use crate::reader::ResultsReader;

/// A job living on a Splunk server, addressed by sid.
#[derive(Debug, Clone)]
pub struct RemoteJob {
    client: SplunkClient,
    sid: String,
}

impl RemoteJob {
    /// Create a handle without checking that the job exists.
    pub fn new(client: SplunkClient, sid: impl Into<String>) -> Self {
        Self {
            client,
            sid: sid.into(),
        }
    }
}

impl SearchJob for RemoteJob {
    fn sid(&self) -> &str {
        &self.sid
    }

    async fn refresh(&self) -> Result<JobState> {
        endpoints::get_job_status(
            &self.client.http,
            &self.client.base_url,
            self.client.auth_token(),
            &self.sid,
        )
        .await
    }

    async fn results(&self, page: ResultsPage) -> Result<ResultsReader> {
        endpoints::get_results(
            &self.client.http,
            &self.client.base_url,
            self.client.auth_token(),
            &self.sid,
            page,
        )
        .await
    }
}

impl SearchBackend for SplunkClient {
    type Job = RemoteJob;

    async fn create_job(&self, query: &str, request: &JobRequest) -> Result<RemoteJob> {
        let sid =
            endpoints::create_job(&self.http, &self.base_url, self.auth_token(), query, request)
                .await?;
        debug!("Created search job: {}", sid);
        Ok(RemoteJob::new(self.clone(), sid))
    }

    async fn oneshot(&self, query: &str, request: &JobRequest) -> Result<ResultsReader> {
        endpoints::oneshot(&self.http, &self.base_url, self.auth_token(), query, request).await
    }

    /// Any status answer, including "not ready", proves the job exists.
    async fn attach_job(&self, sid: &str) -> Result<RemoteJob> {
        if sid.trim().is_empty() {
            return Err(ClientError::InvalidArgument(
                "a job sid is required to attach".to_string(),
            ));
        }
        endpoints::get_job_status(&self.http, &self.base_url, self.auth_token(), sid).await?;
        Ok(RemoteJob::new(self.clone(), sid))
    }
}
