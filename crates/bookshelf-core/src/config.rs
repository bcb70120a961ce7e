use crate::ValidationError;

/// Root of the public itbook.store API.
pub const DEFAULT_BASE_URL: &str = "https://api.itbook.store/1.0";

const DEFAULT_USER_AGENT: &str = concat!("bookshelf/", env!("CARGO_PKG_VERSION"));

/// Store configuration.
///
/// `timeout_ms` is `None` by default: the store itself imposes no deadline on
/// a load, callers opt in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
    timeout_ms: Option<u64>,
    user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl CatalogConfig {
    /// Build a config rooted at `base_url`; a trailing `/` is dropped.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            ..Self::default()
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyBaseUrl);
    }

    let has_scheme = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
    if !has_scheme {
        return Err(ValidationError::InvalidBaseUrl {
            value: input.to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}
