//! Entry point: one fetch-and-save cycle against the PrizePicks projections
//! API.
//!
//! The run is strictly linear: resolve the output path next to the binary,
//! drop any file left over from a previous run, fetch the projections, write
//! the body to disk, print where it went. The first error at any step aborts
//! the run with a non-zero exit code.

mod error;
mod http;
mod output;


use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::http::PrizePicksClient;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn print_usage() {
    println!(
        "USAGE: {}\n\n\
         Fetches the PrizePicks NBA projections feed and saves it as\n\
         {} next to the binary, replacing any previous copy.\n\n\
         FLAGS:\n  \
         -h, --help     Print this help\n  \
         -V, --version  Print version",
        env!("CARGO_PKG_NAME"),
        output::OUTPUT_FILE_NAME,
    );
}

/// Handles the (empty) argument surface. Nothing is configurable; anything
/// other than `--help`/`--version` is rejected before any I/O happens.
fn handle_args() -> Option<ExitCode> {
    let arg = std::env::args().nth(1)?;
    match arg.as_str() {
        "--help" | "-h" => {
            print_usage();
            Some(ExitCode::SUCCESS)
        }
        "--version" | "-V" => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Some(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("Unknown argument: {other}");
            print_usage();
            Some(ExitCode::FAILURE)
        }
    }
}

/// One fetch-and-save cycle.
///
/// The stale file is dropped before the request goes out, so a failed fetch
/// leaves no output file behind, not the previous run's copy.
async fn run(client: &PrizePicksClient, path: &Path) -> Result<()> {
    output::remove_stale(path)?;
    let body = client.fetch_projections().await?;
    output::write_body(path, &body)?;
    println!("done - file saved at: {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    if let Some(code) = handle_args() {
        return code;
    }

    info!("fetching PrizePicks projections");

    let path = match output::default_output_path() {
        Ok(path) => path,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let client = PrizePicksClient::new();
    match run(&client, &path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
