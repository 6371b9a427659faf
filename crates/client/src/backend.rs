//! Backend seam between the search core and a Splunk deployment.
//!
//! # What this module handles:
//! - The operations the orchestrator needs from a backend: job creation,
//!   oneshot searches, attaching to an existing job
//! - The operations it needs from a job handle: status refresh and
//!   windowed result retrieval
//!
//! # What this module does NOT handle:
//! - Any wire format (see [`crate::client`] for the REST implementation)
//!
//! # Invariants
//! - A job handle never deletes or cancels the backend job.

use std::future::Future;

use crate::endpoints::search::{JobRequest, ResultsPage};
use crate::error::Result;
use crate::models::JobState;
use crate::reader::ResultsReader;

/// Handle to a search job that exists on the backend.
pub trait SearchJob: Send + Sync {
    /// The job's search id.
    fn sid(&self) -> &str;

    /// Read a fresh status snapshot.
    fn refresh(&self) -> impl Future<Output = Result<JobState>> + Send;

    /// Fetch a window of the job's results.
    fn results(&self, page: ResultsPage) -> impl Future<Output = Result<ResultsReader>> + Send;
}

/// A Splunk deployment that can run searches.
pub trait SearchBackend: Send + Sync {
    type Job: SearchJob;

    /// Create a search job. With `exec_mode=blocking` this returns once the
    /// job has finished.
    fn create_job(
        &self,
        query: &str,
        request: &JobRequest,
    ) -> impl Future<Output = Result<Self::Job>> + Send;

    /// Run a search and return its results directly, without a job handle.
    fn oneshot(
        &self,
        query: &str,
        request: &JobRequest,
    ) -> impl Future<Output = Result<ResultsReader>> + Send;

    /// Look up an existing job by sid.
    ///
    /// Fails with [`crate::ClientError::NotFound`] for an unknown sid.
    fn attach_job(&self, sid: &str) -> impl Future<Output = Result<Self::Job>> + Send;
}
