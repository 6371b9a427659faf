//! Search command implementation.

use std::io::{self, BufWriter};
use std::pin::pin;

use anyhow::Result;
use futures::StreamExt;
use splunk_search::SearchContext;
use tracing::info;

use crate::args::Cli;
use crate::output::RecordWriter;

pub async fn run(cli: Cli) -> Result<()> {
    let query = cli.search_query()?;

    let mut ctx = SearchContext::new();
    ctx.configure(cli.connection.settings(), !cli.connection.no_env)?;

    let stdout = io::stdout();
    let mut writer = RecordWriter::new(BufWriter::new(stdout.lock()), cli.format);
    let mut records = pin!(ctx.search(&query));

    while cli.limit.is_none_or(|limit| writer.written() < limit) {
        match records.next().await {
            Some(Ok(record)) => writer.write_record(&record)?,
            Some(Err(e)) => {
                // Records already written stay valid output
                writer.finish()?;
                return Err(e.into());
            }
            None => break,
        }
    }

    let written = writer.finish()?;
    info!("Wrote {} records", written);
    Ok(())
}
