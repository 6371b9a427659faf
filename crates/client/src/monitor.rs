//! Progress monitoring for running search jobs.
//!
//! # What this module handles:
//! - Polling a job at a fixed interval until it reports done
//! - Progress telemetry at info level on every ready snapshot
//!
//! # What this module does NOT handle:
//! - Deadlines; a job that never finishes is polled forever
//! - Backoff; the interval is constant
//!
//! # Invariants
//! - Returns only with a snapshot whose done flag is set.
//! - A status error ends monitoring immediately.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::backend::SearchJob;
use crate::error::Result;
use crate::models::{JobState, JobStatus};

enum MonitorState {
    AwaitingReady,
    PollingProgress(JobStatus),
    Done(JobStatus),
}

/// Poll `job` until it is done and return the terminal snapshot.
pub async fn monitor<J: SearchJob>(job: &J, poll_interval: Duration) -> Result<JobStatus> {
    let mut state = MonitorState::AwaitingReady;

    loop {
        state = match state {
            MonitorState::AwaitingReady => match job.refresh().await? {
                JobState::NotReady => {
                    debug!("Search job {} not ready yet", job.sid());
                    tokio::time::sleep(poll_interval).await;
                    MonitorState::AwaitingReady
                }
                JobState::Ready(status) => MonitorState::PollingProgress(status),
            },
            MonitorState::PollingProgress(status) => {
                info!(
                    "Progress: {:.1}%  Scanned: {}  Matched: {}  Results: {}",
                    status.done_percent(),
                    status.scan_count,
                    status.event_count,
                    status.result_count
                );
                if status.is_failed {
                    warn!(
                        "Search job {} reports failure (state {})",
                        job.sid(),
                        status.dispatch_state
                    );
                }
                if status.is_done {
                    MonitorState::Done(status)
                } else {
                    tokio::time::sleep(poll_interval).await;
                    MonitorState::AwaitingReady
                }
            }
            MonitorState::Done(status) => {
                info!("Search job {} done", job.sid());
                return Ok(status);
            }
        };
    }
}
