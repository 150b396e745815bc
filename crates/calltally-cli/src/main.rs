use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod error;
mod report;
mod summarize;

use cli::Cli;
use error::render_error;
use summarize::run_summarize;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI args: {:?}", cli);

    match run_summarize(&cli) {
        Ok(code) => code,
        Err(err) => render_error(&err),
    }
}
