mod books;
mod bounds;

use bookshelf_core::{CatalogSnapshot, CatalogStore, FetchStatus};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub use bounds::BoundsReport;

/// Result of a command, rendered by `output`.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Books(CatalogSnapshot),
    Bounds(BoundsReport),
}

impl Report {
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Books(snapshot) => snapshot.status,
            Self::Bounds(report) => report.status,
        }
    }
}

pub async fn run(cli: &Cli, store: &CatalogStore) -> Result<Report, CliError> {
    match &cli.command {
        Command::Books(args) => books::run(args, store).await.map(Report::Books),
        Command::Bounds(args) => Ok(Report::Bounds(bounds::run(args, store).await)),
    }
}
