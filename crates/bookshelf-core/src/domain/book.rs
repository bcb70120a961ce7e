use serde::{Deserialize, Serialize};

use crate::PriceError;

use super::parse_price;

/// One catalog entry as returned by the listing and search endpoints.
///
/// Only `isbn13` and `price` carry meaning for the store; the descriptive
/// fields are passed through to presentation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn13: String,
    pub price: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
}

impl Book {
    pub fn new(isbn13: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            isbn13: isbn13.into(),
            price: price.into(),
            title: String::new(),
            subtitle: String::new(),
            image: String::new(),
            url: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Parsed price amount, see [`parse_price`].
    pub fn amount(&self) -> Result<f64, PriceError> {
        parse_price(&self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_record() {
        let raw = r#"{
            "title": "Learning Go",
            "subtitle": "An Idiomatic Approach",
            "isbn13": "9781492077213",
            "price": "$45.99",
            "image": "https://itbook.store/img/books/9781492077213.png",
            "url": "https://itbook.store/books/9781492077213"
        }"#;

        let book: Book = serde_json::from_str(raw).expect("record should deserialize");
        assert_eq!(book.isbn13, "9781492077213");
        assert_eq!(book.title, "Learning Go");
        assert_eq!(book.amount(), Ok(45.99));
    }

    #[test]
    fn descriptive_fields_default_to_empty() {
        let book: Book = serde_json::from_str(r#"{"isbn13":"A","price":"$1.00"}"#)
            .expect("minimal record should deserialize");
        assert_eq!(book, Book::new("A", "$1.00"));
    }

    #[test]
    fn missing_price_is_rejected() {
        let result = serde_json::from_str::<Book>(r#"{"isbn13":"A"}"#);
        assert!(result.is_err());
    }
}
