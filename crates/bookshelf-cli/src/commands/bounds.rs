use bookshelf_core::{CatalogStore, FetchStatus, PriceRange};
use serde::Serialize;

use crate::cli::BoundsArgs;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsReport {
    pub status: FetchStatus,
    pub query: String,
    pub total: usize,
    pub max_price: f64,
    pub range: PriceRange,
    pub error: Option<String>,
}

pub async fn run(args: &BoundsArgs, store: &CatalogStore) -> BoundsReport {
    store.load(&args.query).await;
    let snapshot = store.snapshot();

    BoundsReport {
        status: snapshot.status,
        query: args.query.trim().to_owned(),
        total: snapshot.total,
        max_price: snapshot.max_price,
        range: snapshot.range,
        error: snapshot.error,
    }
}
