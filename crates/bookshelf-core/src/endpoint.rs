use std::fmt::{Display, Formatter};

/// Remote catalog endpoint selected for a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEndpoint {
    /// Latest listings, used when no query is given.
    Latest,
    /// Keyword search.
    Search(String),
}

impl CatalogEndpoint {
    /// Select the endpoint for a raw query string.
    ///
    /// A query that is empty after trimming selects [`CatalogEndpoint::Latest`].
    pub fn for_query(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Self::Latest
        } else {
            Self::Search(query.to_owned())
        }
    }

    /// Full URL under `base`, which must not carry a trailing slash.
    pub fn url(&self, base: &str) -> String {
        match self {
            Self::Latest => format!("{base}/new"),
            Self::Search(query) => format!("{base}/search/{}", urlencoding::encode(query)),
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Latest => "new",
            Self::Search(_) => "search",
        }
    }
}

impl Display for CatalogEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => f.write_str("new"),
            Self::Search(query) => write!(f, "search/{query}"),
        }
    }
}
