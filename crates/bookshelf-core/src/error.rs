use thiserror::Error;

/// Validation errors for configuration and caller-supplied values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("base url cannot be empty")]
    EmptyBaseUrl,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("price range low {low} exceeds high {high}")]
    InvertedRange { low: f64, high: f64 },
}

/// A price string that does not satisfy the `<symbol><decimal>` contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price '{value}' is not a decimal amount")]
    Unparseable { value: String },
    #[error("price '{value}' is not finite")]
    NonFinite { value: String },
    #[error("price '{value}' is negative")]
    Negative { value: String },
}

/// Fetch-layer failure recorded by the catalog store.
///
/// These never escape `CatalogStore::load`; they are absorbed into
/// [`FetchStatus::Failed`](crate::FetchStatus::Failed) and exposed through
/// `last_error` for presentation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog transport error: {message}")]
    Transport { message: String },
    #[error("catalog upstream returned status {status}")]
    UpstreamStatus { status: u16 },
    #[error("catalog response body is not valid JSON: {message}")]
    InvalidBody { message: String },
}

impl CatalogError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "catalog.transport",
            Self::UpstreamStatus { .. } => "catalog.upstream_status",
            Self::InvalidBody { .. } => "catalog.invalid_body",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_codes_are_stable() {
        assert_eq!(
            CatalogError::Transport {
                message: String::from("reset")
            }
            .code(),
            "catalog.transport"
        );
        assert_eq!(
            CatalogError::UpstreamStatus { status: 503 }.code(),
            "catalog.upstream_status"
        );
        assert_eq!(
            CatalogError::UpstreamStatus { status: 503 }.to_string(),
            "catalog upstream returned status 503"
        );
    }
}
