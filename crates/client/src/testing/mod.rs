//! Testing utilities for the search core.
//!
//! This module provides an in-memory [`SearchBackend`] that records every
//! call made against it, so orchestration can be tested without a server.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use splunk_search::testing::{FakeBackend, FakeJob};
//!
//! let backend = FakeBackend::new(FakeJob::finished("1700000000.1", 65_000));
//! // run a search against `backend`, then:
//! assert_eq!(backend.calls().fetch_offsets(), vec![0, 30_000, 60_000]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{Value, json};

use crate::backend::{SearchBackend, SearchJob};
use crate::endpoints::search::{JobRequest, ResultsPage};
use crate::error::{ClientError, Result};
use crate::models::{DispatchState, JobState, JobStatus};
use crate::reader::{ResultItem, ResultsReader};

/// Every backend interaction observed by a [`FakeBackend`] and its jobs.
#[derive(Debug, Default, Clone)]
pub struct Calls {
    /// `(query, request)` for each job creation.
    pub created: Vec<(String, JobRequest)>,
    /// `(query, request)` for each oneshot search.
    pub oneshots: Vec<(String, JobRequest)>,
    /// Sids passed to `attach_job`.
    pub attached: Vec<String>,
    /// Number of status refreshes.
    pub refreshes: usize,
    /// Every result window requested.
    pub fetches: Vec<ResultsPage>,
}

impl Calls {
    /// Offsets of all result fetches, in request order.
    pub fn fetch_offsets(&self) -> Vec<usize> {
        self.fetches.iter().map(|p| p.offset).collect()
    }

    /// Whether the backend was touched at all.
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
            && self.oneshots.is_empty()
            && self.attached.is_empty()
            && self.refreshes == 0
            && self.fetches.is_empty()
    }
}

#[derive(Debug, Default, Clone)]
struct CallLog(Arc<Mutex<Calls>>);

impl CallLog {
    fn lock(&self) -> MutexGuard<'_, Calls> {
        // A poisoned log only means another test thread panicked
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Scripted job handle.
///
/// `refresh` pops states from a script and repeats the final snapshot once
/// the script is exhausted. `results` slices the configured items.
#[derive(Debug, Clone)]
pub struct FakeJob {
    sid: String,
    script: Arc<Mutex<VecDeque<JobState>>>,
    final_status: JobStatus,
    items: Arc<Vec<ResultItem>>,
    fail_refresh: bool,
    fail_fetch_at: Option<usize>,
    log: CallLog,
}

impl FakeJob {
    /// A job that is already done and holds `result_count` records `{"n": i}`.
    pub fn finished(sid: impl Into<String>, result_count: usize) -> Self {
        let sid = sid.into();
        Self {
            final_status: done_status(&sid, result_count),
            sid,
            script: Arc::default(),
            items: Arc::new(records(result_count)),
            fail_refresh: false,
            fail_fetch_at: None,
            log: CallLog::default(),
        }
    }

    /// States returned by `refresh` before the final done snapshot.
    pub fn with_script(self, states: impl IntoIterator<Item = JobState>) -> Self {
        Self {
            script: Arc::new(Mutex::new(states.into_iter().collect())),
            ..self
        }
    }

    /// Replace the items served by `results`.
    pub fn with_items(self, items: Vec<ResultItem>) -> Self {
        Self {
            items: Arc::new(items),
            ..self
        }
    }

    /// Override the result count reported by the final snapshot.
    pub fn with_reported_count(mut self, result_count: usize) -> Self {
        self.final_status.result_count = result_count;
        self
    }

    /// Make every status refresh fail.
    pub fn failing_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    /// Make the fetch at `offset` fail.
    pub fn failing_fetch_at(mut self, offset: usize) -> Self {
        self.fail_fetch_at = Some(offset);
        self
    }
}

impl SearchJob for FakeJob {
    fn sid(&self) -> &str {
        &self.sid
    }

    async fn refresh(&self) -> Result<JobState> {
        self.log.lock().refreshes += 1;
        if self.fail_refresh {
            return Err(server_error("status unavailable"));
        }
        let next = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        Ok(next.unwrap_or_else(|| JobState::Ready(self.final_status.clone())))
    }

    async fn results(&self, page: ResultsPage) -> Result<ResultsReader> {
        self.log.lock().fetches.push(page);
        if self.fail_fetch_at == Some(page.offset) {
            return Err(server_error("results unavailable"));
        }
        let end = if page.count == 0 {
            self.items.len()
        } else {
            page.offset.saturating_add(page.count).min(self.items.len())
        };
        let window = self
            .items
            .get(page.offset.min(end)..end)
            .unwrap_or_default()
            .to_vec();
        Ok(ResultsReader::from_items(window))
    }
}

/// In-memory backend serving a single [`FakeJob`].
#[derive(Debug, Clone)]
pub struct FakeBackend {
    job: FakeJob,
    oneshot_items: Vec<ResultItem>,
}

impl FakeBackend {
    /// Serve `job` for creation and for attach by its sid.
    pub fn new(job: FakeJob) -> Self {
        let oneshot_items = job.items.to_vec();
        Self { job, oneshot_items }
    }

    /// Replace the items answered by `oneshot`.
    pub fn with_oneshot_items(mut self, items: Vec<ResultItem>) -> Self {
        self.oneshot_items = items;
        self
    }

    /// Snapshot of the calls observed so far.
    pub fn calls(&self) -> Calls {
        self.job.log.lock().clone()
    }
}

impl SearchBackend for FakeBackend {
    type Job = FakeJob;

    async fn create_job(&self, query: &str, request: &JobRequest) -> Result<FakeJob> {
        self.job
            .log
            .lock()
            .created
            .push((query.to_string(), request.clone()));
        Ok(self.job.clone())
    }

    async fn oneshot(&self, query: &str, request: &JobRequest) -> Result<ResultsReader> {
        self.job
            .log
            .lock()
            .oneshots
            .push((query.to_string(), request.clone()));
        Ok(ResultsReader::from_items(self.oneshot_items.clone()))
    }

    async fn attach_job(&self, sid: &str) -> Result<FakeJob> {
        self.job.log.lock().attached.push(sid.to_string());
        if sid == self.job.sid {
            Ok(self.job.clone())
        } else {
            Err(ClientError::NotFound(format!("search job {}", sid)))
        }
    }
}

/// `count` record items shaped `{"n": i}`.
pub fn records(count: usize) -> Vec<ResultItem> {
    (0..count).map(|n| record(json!({ "n": n }))).collect()
}

/// Wrap a JSON object as a record item.
///
/// # Panics
/// If `value` is not an object.
pub fn record(value: Value) -> ResultItem {
    match value {
        Value::Object(map) => ResultItem::Record(map),
        other => panic!("record must be a JSON object, got {other}"),
    }
}

/// A finished snapshot reporting `result_count` results.
pub fn done_status(sid: &str, result_count: usize) -> JobStatus {
    JobStatus {
        sid: sid.to_string(),
        dispatch_state: DispatchState::Done,
        is_done: true,
        is_failed: false,
        done_progress: 1.0,
        scan_count: result_count,
        event_count: result_count,
        result_count,
    }
}

/// A running snapshot at `progress` (0.0 to 1.0).
pub fn running_status(sid: &str, progress: f64) -> JobStatus {
    JobStatus {
        sid: sid.to_string(),
        dispatch_state: DispatchState::Running,
        is_done: false,
        is_failed: false,
        done_progress: progress,
        scan_count: 0,
        event_count: 0,
        result_count: 0,
    }
}

fn server_error(message: &str) -> ClientError {
    ClientError::ApiError {
        status: 500,
        url: "memory://fake".to_string(),
        message: message.to_string(),
        request_id: None,
    }
}
