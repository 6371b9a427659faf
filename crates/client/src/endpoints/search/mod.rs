//! Search job endpoints.

mod jobs;
mod types;

pub use jobs::{create_job, get_job_status, get_results, oneshot};
pub use types::{JobExecMode, JobRequest, OutputMode, RESERVED_PARAMS, ResultsPage, SearchLevel};
