mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

use bookshelf_core::{CatalogStore, FetchStatus};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    match run(&cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = config::resolve(cli)?;
    let store = CatalogStore::from_config(config);

    let report = commands::run(cli, &store).await?;
    output::render(&report, cli.format, cli.pretty)?;

    Ok(ExitCode::from(status_exit_code(report.status())))
}

/// A load that ended `Failed` exits with 3 after its report is printed.
const fn status_exit_code(status: FetchStatus) -> u8 {
    match status {
        FetchStatus::Failed => 3,
        FetchStatus::Idle | FetchStatus::Loading | FetchStatus::Success => 0,
    }
}
