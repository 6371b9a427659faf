//! Search job models.
//!
//! # What this module handles:
//! - Job status snapshots as returned by `/services/search/jobs/{sid}`
//! - Readiness classification of a snapshot
//!
//! # What this module does NOT handle:
//! - Polling (see [`crate::monitor`])
//! - HTTP transport (see [`crate::endpoints::search`])

use serde::Deserialize;
use std::fmt;

/// Dispatch state of a search job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchState {
    Queued,
    Parsing,
    Running,
    #[serde(rename = "PAUSE")]
    Paused,
    Finalizing,
    Failed,
    Done,
    /// Unknown or unrecognized state.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Queued => "QUEUED",
            Self::Parsing => "PARSING",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSE",
            Self::Finalizing => "FINALIZING",
            Self::Failed => "FAILED",
            Self::Done => "DONE",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Point-in-time status of a search job.
///
/// `is_done` is normalized to a boolean here so no string comparison leaks
/// into the polling logic.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JobStatus {
    #[serde(default)]
    pub sid: String,
    #[serde(rename = "dispatchState", default)]
    pub dispatch_state: DispatchState,
    #[serde(
        rename = "isDone",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_flag"
    )]
    pub is_done: bool,
    #[serde(
        rename = "isFailed",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_flag"
    )]
    pub is_failed: bool,
    /// Completion fraction in `0.0..=1.0`.
    #[serde(
        rename = "doneProgress",
        default,
        deserialize_with = "crate::serde_helpers::f64_from_string_or_number"
    )]
    pub done_progress: f64,
    #[serde(
        rename = "scanCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub scan_count: usize,
    #[serde(
        rename = "eventCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub event_count: usize,
    #[serde(
        rename = "resultCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub result_count: usize,
}

impl JobStatus {
    /// Whether the job has left the pre-execution states.
    pub fn is_ready(&self) -> bool {
        !matches!(
            self.dispatch_state,
            DispatchState::Queued | DispatchState::Parsing
        )
    }

    /// Completion as a percentage.
    pub fn done_percent(&self) -> f64 {
        self.done_progress * 100.0
    }
}

/// Result of refreshing a job handle.
#[derive(Debug, Clone, PartialEq)]
pub enum JobState {
    /// The backend has not started executing the job yet.
    NotReady,
    /// The job is executing or finished.
    Ready(JobStatus),
}

impl JobState {
    /// Classify a snapshot by its dispatch state.
    pub fn from_status(status: JobStatus) -> Self {
        if status.is_ready() {
            Self::Ready(status)
        } else {
            Self::NotReady
        }
    }
}
