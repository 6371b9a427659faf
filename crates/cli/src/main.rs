//! splunk-search - run a Splunk search from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run the search through the shared library and stream records to stdout.
//!
//! Does NOT handle:
//! - Search execution or REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout only carries records.

mod args;
mod commands;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use splunk_search_config::load_dotenv;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match commands::search::run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
