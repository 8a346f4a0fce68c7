//! Input and output of the shorten operation.

use chrono::{DateTime, Utc};

/// A request to shorten a URL.
///
/// Built with [`ShortenRequest::new`] and the `with_*` methods; immutable
/// once handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    url: String,
    custom_code: Option<String>,
    expires_hours: Option<i64>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            custom_code: None,
            expires_hours: None,
        }
    }

    /// Requests a specific short code instead of a generated one.
    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    /// Makes the link expire `hours` after creation.
    pub fn with_expires_hours(mut self, hours: i64) -> Self {
        self.expires_hours = Some(hours);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn custom_code(&self) -> Option<&str> {
        self.custom_code.as_deref()
    }

    pub fn expires_hours(&self) -> Option<i64> {
        self.expires_hours
    }
}

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
