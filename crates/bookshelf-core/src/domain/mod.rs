//! # Domain Models
//!
//! Catalog domain types for bookshelf.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Book`] | One catalog entry as returned by the listing/search endpoints |
//! | [`PriceRange`] | Inclusive `[low, high]` bound pair used for filtering |
//! | [`FetchStatus`] | Lifecycle of the most recent catalog load |
//!
//! Prices arrive as currency strings (`"$32.04"`). [`parse_price`] is the one
//! place that turns them into numbers; bounds derivation and filtering both
//! go through it.

mod book;
mod price;
mod range;
mod status;

pub use book::Book;
pub use price::parse_price;
pub use range::PriceRange;
pub use status::FetchStatus;
