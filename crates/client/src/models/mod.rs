//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod jobs;

pub use common::{MessageType, SplunkMessage, SplunkMessages};
pub use jobs::{DispatchState, JobState, JobStatus};
