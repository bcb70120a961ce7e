//! # Bookshelf Core
//!
//! Catalog acquisition and price-range filtering for the bookshelf client.
//!
//! ## Overview
//!
//! - **Domain models** for books, price ranges, and fetch status
//! - **Catalog store** that owns the fetch lifecycle and the loaded dataset
//! - **Range filter** deriving the visible subset and the price bounds
//! - **HTTP client seam** with a reqwest-backed production transport
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint root, timeout, user agent |
//! | [`domain`] | `Book`, `PriceRange`, `FetchStatus`, price parsing |
//! | [`endpoint`] | Latest-listings vs. search URL selection |
//! | [`error`] | Validation, price, and catalog error types |
//! | [`filter`] | Pure range filtering and max-price derivation |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`store`] | `CatalogStore` state machine |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookshelf_core::{CatalogConfig, CatalogStore, FetchStatus, PriceRange};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = CatalogStore::from_config(CatalogConfig::default());
//!     store.load("golang").await;
//!
//!     if store.status() == FetchStatus::Success {
//!         store.set_range(PriceRange::clamped(10.0, 40.0, store.max_price()));
//!         for book in store.filtered_books() {
//!             println!("{} {}", book.price, book.title);
//!         }
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fetch failures never propagate out of [`CatalogStore::load`]. They are
//! absorbed into [`FetchStatus::Failed`] and kept as
//! [`CatalogStore::last_error`]:
//!
//! ```rust
//! use bookshelf_core::CatalogError;
//!
//! fn banner(error: &CatalogError) -> &'static str {
//!     match error {
//!         CatalogError::Transport { .. } => "network unavailable",
//!         CatalogError::UpstreamStatus { .. } => "catalog service error",
//!         CatalogError::InvalidBody { .. } => "unexpected catalog response",
//!     }
//! }
//! ```

pub mod config;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod store;

pub use config::{CatalogConfig, DEFAULT_BASE_URL};

pub use domain::{parse_price, Book, FetchStatus, PriceRange};

pub use endpoint::CatalogEndpoint;

pub use error::{CatalogError, PriceError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use store::{CatalogSnapshot, CatalogStore};
