//! Catalog fetch lifecycle.
//!
//! [`CatalogStore`] owns the only copy of the catalog state. Two stimuli mutate
//! it: [`CatalogStore::load`] and [`CatalogStore::set_range`]. Everything
//! else is a read.
//!
//! ```text
//!   Idle ──load──▶ Loading ──2xx──▶ Success ─┐
//!                    ▲    └─error─▶ Failed  ─┤
//!                    └──────────load─────────┘
//! ```
//!
//! Each load takes a request token. A response is committed only while its
//! token is still the latest issued, so an overtaken request can never
//! overwrite the result of a newer one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::endpoint::CatalogEndpoint;
use crate::filter;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{Book, CatalogConfig, CatalogError, FetchStatus, PriceRange};

#[derive(Debug, Default)]
struct CatalogState {
    status: FetchStatus,
    books: Vec<Book>,
    range: PriceRange,
}

/// Read-only view handed to presentation.
///
/// Only a store whose last load succeeded reports rows, bounds, and totals.
/// A loading or failed store reports an empty view with a `[0, 0]` range, so
/// stale books never leak into the list or the range selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSnapshot {
    pub status: FetchStatus,
    pub books: Vec<Book>,
    pub range: PriceRange,
    pub max_price: f64,
    pub total: usize,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct StoreInner {
    state: CatalogState,
    last_error: Option<CatalogError>,
    issued: u64,
}

/// Owner of the catalog fetch lifecycle and the loaded dataset.
pub struct CatalogStore {
    config: CatalogConfig,
    http_client: Arc<dyn HttpClient>,
    inner: Mutex<StoreInner>,
}

impl CatalogStore {
    pub fn new(config: CatalogConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Store backed by [`ReqwestHttpClient`].
    pub fn from_config(config: CatalogConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::from_config(&config));
        Self::new(config, http_client)
    }

    /// Fetch the catalog for `query` and commit the outcome.
    ///
    /// A query that is empty after trimming whitespace loads the latest
    /// listings, so `"  "` behaves like `""`. Anything else searches.
    /// Failures are never returned: they land in [`FetchStatus::Failed`] and
    /// [`CatalogStore::last_error`].
    pub async fn load(&self, query: &str) {
        let endpoint = CatalogEndpoint::for_query(query);
        let token = self.begin_load();
        let url = endpoint.url(self.config.base_url());
        debug!(token, endpoint = endpoint.kind(), %url, "issuing catalog request");

        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());
        let outcome = self.fetch(request).await;

        self.commit(token, &endpoint, outcome);
    }

    /// Replace the active range. Not validated; see [`PriceRange::clamped`].
    pub fn set_range(&self, range: PriceRange) {
        let mut inner = self.lock();
        debug!(low = range.low, high = range.high, "price range updated");
        inner.state.range = range;
    }

    /// Highest parsed price over the current books, `0.0` when empty.
    pub fn max_price(&self) -> f64 {
        filter::max_price(&self.lock().state.books)
    }

    pub fn status(&self) -> FetchStatus {
        self.lock().state.status
    }

    pub fn range(&self) -> PriceRange {
        self.lock().state.range
    }

    /// The raw dataset from the last successful load.
    pub fn books(&self) -> Vec<Book> {
        self.lock().state.books.clone()
    }

    pub fn last_error(&self) -> Option<CatalogError> {
        self.lock().last_error.clone()
    }

    /// Current books narrowed to the active range.
    pub fn filtered_books(&self) -> Vec<Book> {
        let inner = self.lock();
        filter::filter(&inner.state.books, inner.state.range)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        let inner = self.lock();
        let state = &inner.state;

        if state.status != FetchStatus::Success {
            return CatalogSnapshot {
                status: state.status,
                books: Vec::new(),
                range: PriceRange::default(),
                max_price: 0.0,
                total: 0,
                error: match state.status {
                    FetchStatus::Failed => inner.last_error.as_ref().map(ToString::to_string),
                    _ => None,
                },
            };
        }

        CatalogSnapshot {
            status: state.status,
            books: filter::filter(&state.books, state.range),
            range: state.range,
            max_price: filter::max_price(&state.books),
            total: state.books.len(),
            error: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_load(&self) -> u64 {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.state.status = FetchStatus::Loading;
        inner.last_error = None;
        inner.issued
    }

    async fn fetch(&self, request: HttpRequest) -> Result<Vec<Book>, CatalogError> {
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| CatalogError::Transport {
                message: error.message().to_owned(),
            })?;

        if !response.is_success() {
            return Err(CatalogError::UpstreamStatus {
                status: response.status,
            });
        }

        decode_books(&response.body)
    }

    fn commit(
        &self,
        token: u64,
        endpoint: &CatalogEndpoint,
        outcome: Result<Vec<Book>, CatalogError>,
    ) {
        let mut inner = self.lock();
        if token != inner.issued {
            debug!(
                token,
                latest = inner.issued,
                endpoint = %endpoint,
                "discarding response from superseded catalog request"
            );
            return;
        }

        match outcome {
            Ok(books) => {
                let max_price = filter::max_price(&books);
                let unpriced = filter::unpriced_count(&books);
                if unpriced > 0 {
                    warn!(
                        unpriced,
                        endpoint = %endpoint,
                        "books with malformed prices are excluded from range filtering"
                    );
                }

                info!(
                    endpoint = %endpoint,
                    books = books.len(),
                    max_price,
                    "catalog loaded"
                );
                inner.state.books = books;
                inner.state.range = PriceRange::up_to(max_price);
                inner.state.status = FetchStatus::Success;
            }
            Err(error) => {
                warn!(endpoint = %endpoint, code = error.code(), %error, "catalog load failed");
                inner.state.status = FetchStatus::Failed;
                inner.last_error = Some(error);
            }
        }
    }
}

/// Extract the `books` array from a response body.
///
/// A body that is not JSON is an error. A JSON body without a `books` array
/// is an empty catalog, and array entries that are not book records are
/// skipped.
pub(crate) fn decode_books(body: &str) -> Result<Vec<Book>, CatalogError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|error| CatalogError::InvalidBody {
            message: error.to_string(),
        })?;

    let Some(entries) = payload.get("books").and_then(Value::as_array) else {
        warn!("catalog payload carries no books array; treating as empty");
        return Ok(Vec::new());
    };

    let mut books = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match Book::deserialize(entry) {
            Ok(book) => books.push(book),
            Err(error) => warn!(index, %error, "skipping malformed catalog record"),
        }
    }

    Ok(books)
}
