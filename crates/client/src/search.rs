//! Search orchestration.
//!
//! Turns one [`SearchQuery`] into a lazy stream of records, whatever the
//! execution mode.
//!
//! # What this module handles:
//! - Dispatching on [`ExecMode`]
//! - Offset pagination over a finished job
//! - Logging failures together with the query text
//!
//! # Invariants
//! - Nothing reaches the backend before the stream is first polled.
//! - At most one result batch is held in memory at a time.
//! - Records arrive in backend order within a batch and in increasing
//!   offset order across batches.
//! - Pagination stops once the offset reaches the reported result count or a
//!   batch yields no records. Errors are never retried.

use futures::future::Either;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use tracing::{debug, error, info};

use crate::backend::{SearchBackend, SearchJob};
use crate::endpoints::search::{JobExecMode, ResultsPage};
use crate::error::{ClientError, Result};
use crate::filter::filter_records;
use crate::monitor::monitor;
use crate::query::{ExecMode, SearchQuery};
use crate::reader::{Record, ResultsReader};

/// Where the records of a dispatched search come from.
enum Source<J> {
    /// A single reader holding the complete result set.
    Reader(ResultsReader),
    /// A finished job to page through.
    Pages { job: J, total: usize },
}

/// Run `query` against `backend`.
///
/// The returned stream must be pinned before calling `next` on it
/// (e.g. with [`std::pin::pin!`]). Dropping it stops the search early; the
/// backend job, if any, is left in place.
pub fn search<'a, B: SearchBackend>(
    backend: &'a B,
    query: &'a SearchQuery,
) -> impl Stream<Item = Result<Record>> + 'a {
    stream::once(dispatch(backend, query))
        .map_ok(move |source| match source {
            Source::Reader(reader) => Either::Left(stream::iter(
                filter_records(reader).map(Ok::<_, ClientError>),
            )),
            Source::Pages { job, total } => Either::Right(paginate(
                job,
                total,
                query.offset(),
                query.batch_size(),
            )),
        })
        .try_flatten()
        .inspect_err(move |e| error!("Search failed for query '{}': {}", query.text(), e))
}

async fn dispatch<B: SearchBackend>(backend: &B, query: &SearchQuery) -> Result<Source<B::Job>> {
    match query.exec_mode() {
        ExecMode::Blocking => {
            info!("Dispatching blocking search: {}", query.text());
            let request = query.job_request(Some(JobExecMode::Blocking));
            let job = backend.create_job(query.text(), &request).await?;
            let reader = job.results(ResultsPage::all()).await?;
            Ok(Source::Reader(reader))
        }
        ExecMode::Oneshot => {
            info!("Dispatching oneshot search: {}", query.text());
            let reader = backend
                .oneshot(query.text(), &query.job_request(None))
                .await?;
            Ok(Source::Reader(reader))
        }
        ExecMode::Normal => {
            info!("Dispatching normal search: {}", query.text());
            let request = query.job_request(Some(JobExecMode::Normal));
            let job = backend.create_job(query.text(), &request).await?;
            info!("Created search job {}", job.sid());
            monitored(job, query).await
        }
        ExecMode::Attach { sid } => {
            info!("Attaching to search job {} for query: {}", sid, query.text());
            let job = backend.attach_job(sid).await?;
            monitored(job, query).await
        }
    }
}

async fn monitored<J: SearchJob>(job: J, query: &SearchQuery) -> Result<Source<J>> {
    let status = monitor(&job, query.poll_interval()).await?;
    info!("Search complete: {} results", status.result_count);
    Ok(Source::Pages {
        job,
        total: status.result_count,
    })
}

/// Page through the results of a finished job.
fn paginate<J: SearchJob>(
    job: J,
    total: usize,
    offset: usize,
    batch_size: usize,
) -> impl Stream<Item = Result<Record>> {
    stream::try_unfold((job, offset), move |(job, offset)| async move {
        if offset >= total {
            return Ok::<_, ClientError>(None);
        }
        debug!(
            "Fetching results {}..{} of {} for job {}",
            offset,
            offset.saturating_add(batch_size).min(total),
            total,
            job.sid()
        );
        let reader = job
            .results(ResultsPage {
                count: batch_size,
                offset,
            })
            .await?;
        let batch: Vec<Record> = filter_records(reader).collect();
        if batch.is_empty() {
            debug!("Empty batch at offset {}, stopping", offset);
            return Ok(None);
        }
        let next = offset.saturating_add(batch_size);
        let batch = stream::iter(batch.into_iter().map(Ok::<_, ClientError>));
        Ok(Some((batch, (job, next))))
    })
    .try_flatten()
}
