//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn parsed arguments into connection settings and a validated query.
//!
//! Non-responsibilities:
//! - Does not run the search (see `commands::search`).
//! - Does not read `SPLUNK_HOST`/`SPLUNK_TOKEN` itself; the search context
//!   merges them unless `--no-env` is given.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use splunk_search::{ClientError, ExecMode, OutputMode, SearchLevel, SearchQuery};
use splunk_search_config::ConnectionSettings;
use splunk_search_config::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_EARLIEST_TIME, DEFAULT_LATEST_TIME, DEFAULT_POLL_INTERVAL_SECS,
};

#[derive(Parser, Debug)]
#[command(name = "splunk-search")]
#[command(about = "Run a Splunk search and stream its results as JSON", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-search 'search index=main error' --earliest -4h\n  splunk-search 'search index=_internal | head 5' --exec-mode oneshot --format json\n  splunk-search 'search *' --exec-mode job_sid --sid 1700000000.42 --limit 100\n"
)]
pub struct Cli {
    /// The search query to execute (e.g., 'search index=main | head 10')
    pub query: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Earliest time for the search (e.g., '-24h', '2024-01-01T00:00:00')
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        env = "SPLUNK_EARLIEST_TIME",
        default_value = DEFAULT_EARLIEST_TIME
    )]
    pub earliest: String,

    /// Latest time for the search (e.g., 'now', '2024-01-02T00:00:00')
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        env = "SPLUNK_LATEST_TIME",
        default_value = DEFAULT_LATEST_TIME
    )]
    pub latest: String,

    /// Execution mode: normal, blocking, oneshot, or job_sid
    #[arg(short = 'm', long, default_value = "normal")]
    pub exec_mode: ExecMode,

    /// Existing job to attach to (requires --exec-mode job_sid)
    #[arg(long)]
    pub sid: Option<String>,

    /// Search level hint: smart, fast, or verbose
    #[arg(long, default_value = "smart")]
    pub search_level: SearchLevel,

    /// Output mode requested from Splunk when the job is created
    #[arg(long, default_value = "json")]
    pub output_mode: OutputMode,

    /// Seconds between job status checks
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    pub poll_interval: u64,

    /// Number of results fetched per request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Offset of the first result to fetch
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Extra Splunk search parameter, forwarded verbatim (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ndjson)]
    pub format: OutputFormat,

    /// Stop after this many records
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Connection overrides; unset flags fall back to the environment.
#[derive(clap::Args, Debug)]
pub struct ConnectionArgs {
    /// Splunk host name (overrides SPLUNK_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Management port (overrides SPLUNK_PORT, default 8089)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Bearer token (overrides SPLUNK_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// URL scheme, http or https (overrides SPLUNK_SCHEME)
    #[arg(long)]
    pub scheme: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long)]
    pub skip_verify: bool,

    /// Request timeout in seconds (overrides SPLUNK_TIMEOUT; none by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Ignore SPLUNK_* connection variables
    #[arg(long)]
    pub no_env: bool,
}

impl ConnectionArgs {
    /// Settings given explicitly on the command line.
    pub fn settings(&self) -> ConnectionSettings {
        let settings = ConnectionSettings {
            host: self.host.clone(),
            port: self.port,
            token: None,
            scheme: self.scheme.clone(),
            skip_verify: self.skip_verify.then_some(true),
            timeout: self.timeout.map(Duration::from_secs),
        };
        match &self.token {
            Some(token) => settings.with_token(token.clone()),
            None => settings,
        }
    }
}

/// Output format for records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Ndjson,
    /// A single JSON array, streamed
    Json,
}

impl Cli {
    /// Build the validated search query.
    pub fn search_query(&self) -> Result<SearchQuery, ClientError> {
        let mut builder = SearchQuery::builder(self.query.clone())
            .earliest_time(self.earliest.clone())
            .latest_time(self.latest.clone())
            .exec_mode(self.exec_mode.clone())
            .search_level(self.search_level)
            .output_mode(self.output_mode)
            .poll_interval(Duration::from_secs(self.poll_interval))
            .batch_size(self.batch_size)
            .offset(self.offset);
        if let Some(sid) = &self.sid {
            builder = builder.job_sid(sid.clone());
        }
        for (key, value) in &self.params {
            builder = builder.param(key.clone(), value.clone());
        }
        builder.build()
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
