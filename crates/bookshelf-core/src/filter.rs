//! Pure price-range filtering over a loaded catalog.
//!
//! Books whose price does not parse are never matched and never contribute
//! to [`max_price`]; they stay in the dataset untouched.

use crate::{Book, PriceRange};

/// Books whose parsed price lies in `range` (inclusive), in input order.
///
/// An inverted range (`low > high`) yields an empty result.
pub fn filter(books: &[Book], range: PriceRange) -> Vec<Book> {
    if !range.is_ordered() {
        return Vec::new();
    }

    books
        .iter()
        .filter(|book| {
            book.amount()
                .map(|amount| range.contains(amount))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Highest parsed price in `books`, or `0.0` when nothing is priced.
pub fn max_price(books: &[Book]) -> f64 {
    books
        .iter()
        .filter_map(|book| book.amount().ok())
        .fold(0.0, f64::max)
}

/// Number of books whose price string violates the price contract.
pub fn unpriced_count(books: &[Book]) -> usize {
    books.iter().filter(|book| book.amount().is_err()).count()
}
