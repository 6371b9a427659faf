//! Search types and options.
//!
//! This module provides the wire-level parameter types sent when a search job
//! is created or a oneshot search runs.
//!
//! # What this module handles:
//! - Backend execution mode, search level, and output format
//! - Form encoding of job creation parameters
//!
//! # What this module does NOT handle:
//! - Choosing an execution strategy (see [`crate::query::ExecMode`])
//! - Result parsing

use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Parameter names set by [`JobRequest`] itself; passthrough parameters may not reuse them.
pub const RESERVED_PARAMS: [&str; 6] = [
    "search",
    "exec_mode",
    "earliest_time",
    "latest_time",
    "adhoc_search_level",
    "output_mode",
];

/// Backend `exec_mode` values accepted by job creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobExecMode {
    /// Creation returns only after the job finished.
    Blocking,
    /// Creation returns immediately with a sid.
    Normal,
}

impl fmt::Display for JobExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocking => write!(f, "blocking"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// Ad-hoc search level hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchLevel {
    #[default]
    Smart,
    Fast,
    Verbose,
}

impl fmt::Display for SearchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Smart => "smart",
            Self::Fast => "fast",
            Self::Verbose => "verbose",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SearchLevel {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "fast" => Ok(Self::Fast),
            "verbose" => Ok(Self::Verbose),
            other => Err(ClientError::InvalidArgument(format!(
                "invalid search level '{}': expected smart, fast or verbose",
                other
            ))),
        }
    }
}

/// Output format hint for search jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Json,
    JsonCols,
    JsonRows,
    Xml,
    Csv,
    Raw,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputMode::Json => "json",
            OutputMode::JsonCols => "json_cols",
            OutputMode::JsonRows => "json_rows",
            OutputMode::Xml => "xml",
            OutputMode::Csv => "csv",
            OutputMode::Raw => "raw",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OutputMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "json_cols" => Ok(Self::JsonCols),
            "json_rows" => Ok(Self::JsonRows),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            "raw" => Ok(Self::Raw),
            other => Err(ClientError::InvalidArgument(format!(
                "invalid output mode '{}'",
                other
            ))),
        }
    }
}

/// Parameters for creating a search job or running a oneshot search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobRequest {
    /// Backend execution mode; `None` omits `exec_mode` (oneshot).
    pub exec_mode: Option<JobExecMode>,
    pub search_level: SearchLevel,
    /// Earliest time (e.g. "-1d", "2024-01-01T00:00:00").
    pub earliest_time: Option<String>,
    /// Latest time (e.g. "now").
    pub latest_time: Option<String>,
    pub output_mode: OutputMode,
    /// Additional backend parameters, sent verbatim after the named ones.
    pub extra: Vec<(String, String)>,
}

impl JobRequest {
    /// Encode as form fields, `search` first.
    pub fn form_params(&self, query: &str) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = vec![("search".to_string(), query.to_string())];

        if let Some(mode) = self.exec_mode {
            form.push(("exec_mode".to_string(), mode.to_string()));
        }
        form.push((
            "adhoc_search_level".to_string(),
            self.search_level.to_string(),
        ));
        // Empty time bounds make Splunk reject the request
        if let Some(earliest) = self.earliest_time.as_deref().filter(|t| !t.trim().is_empty()) {
            form.push(("earliest_time".to_string(), earliest.to_string()));
        }
        if let Some(latest) = self.latest_time.as_deref().filter(|t| !t.trim().is_empty()) {
            form.push(("latest_time".to_string(), latest.to_string()));
        }
        form.push(("output_mode".to_string(), self.output_mode.to_string()));
        form.extend(self.extra.iter().cloned());
        form
    }

    /// Whether a passthrough parameter with this name is present.
    pub fn has_extra(&self, name: &str) -> bool {
        self.extra.iter().any(|(k, _)| k == name)
    }
}

/// A window of results to fetch from a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsPage {
    /// Maximum number of results; `0` asks for all of them.
    pub count: usize,
    pub offset: usize,
}

impl ResultsPage {
    /// The complete result set in one response.
    pub fn all() -> Self {
        Self {
            count: 0,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(form: &[(String, String)]) -> Vec<&str> {
        form.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_form_params_order_and_values() {
        let request = JobRequest {
            exec_mode: Some(JobExecMode::Normal),
            search_level: SearchLevel::Fast,
            earliest_time: Some("-1d".to_string()),
            latest_time: Some("now".to_string()),
            output_mode: OutputMode::Json,
            extra: vec![("max_count".to_string(), "500".to_string())],
        };

        let form = request.form_params("search index=main error");
        assert_eq!(
            keys(&form),
            vec![
                "search",
                "exec_mode",
                "adhoc_search_level",
                "earliest_time",
                "latest_time",
                "output_mode",
                "max_count"
            ]
        );
        assert_eq!(form[0].1, "search index=main error");
        assert_eq!(form[1].1, "normal");
        assert_eq!(form[2].1, "fast");
    }

    #[test]
    fn test_form_params_without_exec_mode() {
        let form = JobRequest::default().form_params("| makeresults");
        assert!(!keys(&form).contains(&"exec_mode"));
    }

    #[test]
    fn test_form_params_skips_blank_time_bounds() {
        let request = JobRequest {
            earliest_time: Some("  ".to_string()),
            latest_time: Some(String::new()),
            ..Default::default()
        };
        let form = request.form_params("search *");
        assert!(!keys(&form).contains(&"earliest_time"));
        assert!(!keys(&form).contains(&"latest_time"));
    }

    #[test]
    fn test_parse_hints() {
        assert_eq!("VERBOSE".parse::<SearchLevel>().unwrap(), SearchLevel::Verbose);
        assert_eq!("json_rows".parse::<OutputMode>().unwrap(), OutputMode::JsonRows);
        assert!("loud".parse::<SearchLevel>().unwrap_err().is_invalid_argument());
        assert!("yaml".parse::<OutputMode>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_results_page_all() {
        assert_eq!(ResultsPage::all(), ResultsPage { count: 0, offset: 0 });
    }
}
