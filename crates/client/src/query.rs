//! Search query construction and validation.
//!
//! # What this module handles:
//! - The execution mode selected per search
//! - The immutable [`SearchQuery`] input and its builder
//!
//! # Invariants
//! - A built query has non-blank text, a batch size of at least 1, no
//!   passthrough parameter that shadows a named one, and carries a sid if
//!   and only if its mode is [`ExecMode::Attach`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use splunk_search_config::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_EARLIEST_TIME, DEFAULT_LATEST_TIME, DEFAULT_POLL_INTERVAL_SECS,
};

use crate::endpoints::search::{
    JobExecMode, JobRequest, OutputMode, RESERVED_PARAMS, SearchLevel,
};
use crate::error::{ClientError, Result};

/// How a query is run and how its results are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExecMode {
    /// Create a job that finishes before the backend answers, then read all results at once.
    Blocking,
    /// Run synchronously; the backend answers with the results, no job handle.
    Oneshot,
    /// Create an asynchronous job, wait for it, then page through results.
    #[default]
    Normal,
    /// Wait for an existing job, then page through its results.
    Attach { sid: String },
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocking => write!(f, "blocking"),
            Self::Oneshot => write!(f, "oneshot"),
            Self::Normal => write!(f, "normal"),
            Self::Attach { .. } => write!(f, "job_sid"),
        }
    }
}

/// Parses the mode names accepted on the wire.
///
/// `job_sid` yields an attach mode without a sid; supply it with
/// [`SearchQueryBuilder::job_sid`].
impl FromStr for ExecMode {
    type Err = ClientError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocking" => Ok(Self::Blocking),
            "oneshot" => Ok(Self::Oneshot),
            "normal" => Ok(Self::Normal),
            "job_sid" => Ok(Self::Attach { sid: String::new() }),
            other => Err(ClientError::InvalidArgument(format!(
                "unknown execution mode '{}': expected blocking, oneshot, normal or job_sid",
                other
            ))),
        }
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
    earliest_time: String,
    latest_time: String,
    exec_mode: ExecMode,
    search_level: SearchLevel,
    output_mode: OutputMode,
    poll_interval: Duration,
    batch_size: usize,
    offset: usize,
    params: Vec<(String, String)>,
}

impl SearchQuery {
    /// Start building a query for `text`.
    pub fn builder(text: impl Into<String>) -> SearchQueryBuilder {
        SearchQueryBuilder::new(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn earliest_time(&self) -> &str {
        &self.earliest_time
    }

    pub fn latest_time(&self) -> &str {
        &self.latest_time
    }

    pub fn exec_mode(&self) -> &ExecMode {
        &self.exec_mode
    }

    pub fn search_level(&self) -> SearchLevel {
        self.search_level
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Passthrough backend parameters, in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The job creation parameters for this query.
    pub(crate) fn job_request(&self, exec_mode: Option<JobExecMode>) -> JobRequest {
        JobRequest {
            exec_mode,
            search_level: self.search_level,
            earliest_time: Some(self.earliest_time.clone()),
            latest_time: Some(self.latest_time.clone()),
            output_mode: self.output_mode,
            extra: self.params.clone(),
        }
    }
}

/// Builder for [`SearchQuery`].
#[derive(Debug, Clone)]
pub struct SearchQueryBuilder {
    text: String,
    earliest_time: String,
    latest_time: String,
    exec_mode: ExecMode,
    job_sid: Option<String>,
    search_level: SearchLevel,
    output_mode: OutputMode,
    poll_interval: Duration,
    batch_size: usize,
    offset: usize,
    params: Vec<(String, String)>,
}

impl SearchQueryBuilder {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            earliest_time: DEFAULT_EARLIEST_TIME.to_string(),
            latest_time: DEFAULT_LATEST_TIME.to_string(),
            exec_mode: ExecMode::default(),
            job_sid: None,
            search_level: SearchLevel::default(),
            output_mode: OutputMode::default(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            batch_size: DEFAULT_BATCH_SIZE,
            offset: 0,
            params: Vec::new(),
        }
    }

    /// Earliest time bound, relative (`-1d`) or absolute.
    pub fn earliest_time(mut self, earliest: impl Into<String>) -> Self {
        self.earliest_time = earliest.into();
        self
    }

    /// Latest time bound, relative (`now`) or absolute.
    pub fn latest_time(mut self, latest: impl Into<String>) -> Self {
        self.latest_time = latest.into();
        self
    }

    pub fn exec_mode(mut self, mode: ExecMode) -> Self {
        self.exec_mode = mode;
        self
    }

    /// Attach to an existing job. Equivalent to `exec_mode(ExecMode::Attach { sid })`.
    pub fn attach(self, sid: impl Into<String>) -> Self {
        self.exec_mode(ExecMode::Attach { sid: sid.into() })
    }

    /// Sid for a mode parsed from `job_sid`.
    pub fn job_sid(mut self, sid: impl Into<String>) -> Self {
        self.job_sid = Some(sid.into());
        self
    }

    pub fn search_level(mut self, level: SearchLevel) -> Self {
        self.search_level = level;
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Records per result page.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Offset of the first result page.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Add a backend parameter that is forwarded verbatim.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Validate and build the query.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for blank query text, a zero
    /// batch size, a reserved passthrough name, an attach mode without a sid,
    /// or a sid given for any other mode.
    pub fn build(self) -> Result<SearchQuery> {
        if self.text.trim().is_empty() {
            return Err(ClientError::InvalidArgument(
                "query text must not be empty".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(ClientError::InvalidArgument(
                "batch size must be at least 1".to_string(),
            ));
        }
        if let Some((name, _)) = self
            .params
            .iter()
            .find(|(name, _)| RESERVED_PARAMS.contains(&name.as_str()))
        {
            return Err(ClientError::InvalidArgument(format!(
                "parameter '{}' cannot be passed through; use the dedicated option",
                name
            )));
        }

        let exec_mode = match (self.exec_mode, self.job_sid) {
            (ExecMode::Attach { sid }, job_sid) => {
                let in_mode = Some(sid.trim()).filter(|s| !s.is_empty());
                let given = job_sid.as_deref().map(str::trim).filter(|s| !s.is_empty());
                let sid = match (in_mode, given) {
                    (Some(a), Some(b)) if a != b => {
                        return Err(ClientError::InvalidArgument(format!(
                            "conflicting job sids: '{}' in the execution mode and '{}' given separately",
                            a, b
                        )));
                    }
                    (Some(sid), _) | (None, Some(sid)) => sid.to_string(),
                    (None, None) => {
                        return Err(ClientError::InvalidArgument(
                            "execution mode job_sid requires a job sid".to_string(),
                        ));
                    }
                };
                ExecMode::Attach { sid }
            }
            (mode, Some(_)) => {
                return Err(ClientError::InvalidArgument(format!(
                    "a job sid is only valid with execution mode job_sid, not {}",
                    mode
                )));
            }
            (mode, None) => mode,
        };

        Ok(SearchQuery {
            text: self.text,
            earliest_time: self.earliest_time,
            latest_time: self.latest_time,
            exec_mode,
            search_level: self.search_level,
            output_mode: self.output_mode,
            poll_interval: self.poll_interval,
            batch_size: self.batch_size,
            offset: self.offset,
            params: self.params,
        })
    }
}
