use bookshelf_core::{CatalogSnapshot, CatalogStore, FetchStatus, PriceRange};
use tracing::debug;

use crate::cli::BooksArgs;
use crate::error::CliError;

pub async fn run(args: &BooksArgs, store: &CatalogStore) -> Result<CatalogSnapshot, CliError> {
    for (flag, value) in [("--min", args.min), ("--max", args.max)] {
        if value.is_some_and(|bound| !bound.is_finite()) {
            return Err(CliError::Command(format!("{flag} must be a finite number")));
        }
    }

    store.load(&args.query).await;

    if store.status() == FetchStatus::Success && (args.min.is_some() || args.max.is_some()) {
        let max_price = store.max_price();
        let range = PriceRange::clamped(
            args.min.unwrap_or(0.0),
            args.max.unwrap_or(max_price),
            max_price,
        );
        debug!(low = range.low, high = range.high, "applying requested price range");
        store.set_range(range);
    }

    Ok(store.snapshot())
}
