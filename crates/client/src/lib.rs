//! Splunk search execution and result streaming.
//!
//! This crate submits a query to a Splunk search backend, follows the
//! resulting job to completion, and hands back its results as a lazy,
//! paginated stream of records.
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use splunk_search::{SearchContext, SearchQuery};
//!
//! let mut ctx = SearchContext::new();
//! ctx.configure(Default::default(), true)?;
//! let query = SearchQuery::builder("search index=main error").build()?;
//! let records: Vec<_> = ctx.search(&query).try_collect().await?;
//! ```

pub mod backend;
pub mod client;
pub mod context;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod models;
pub mod monitor;
pub mod query;
pub mod reader;
pub mod search;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use backend::{SearchBackend, SearchJob};
pub use client::builder::SplunkClientBuilder;
pub use client::{RemoteJob, SplunkClient};
pub use context::SearchContext;
pub use endpoints::search::{JobExecMode, JobRequest, OutputMode, ResultsPage, SearchLevel};
pub use error::{ClientError, Result};
pub use filter::filter_records;
pub use models::{DispatchState, JobState, JobStatus, MessageType, SplunkMessage};
pub use monitor::monitor;
pub use query::{ExecMode, SearchQuery, SearchQueryBuilder};
pub use reader::{Record, ResultItem, ResultsReader};
pub use search::search;
