//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{ShortenRequest, ShortenedUrl};

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenUrlRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code, ASCII letters and digits only.
    ///
    /// The configured maximum length is enforced by the service.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = "*CUSTOM_CODE_REGEX", message = "Only letters and digits are allowed"))]
    pub custom_code: Option<String>,

    /// Optional lifetime in whole hours, counted from creation.
    #[validate(range(min = 1, message = "Must be a positive number of hours"))]
    pub expires_hours: Option<i64>,
}

impl From<ShortenUrlRequest> for ShortenRequest {
    fn from(dto: ShortenUrlRequest) -> Self {
        let mut request = ShortenRequest::new(dto.url);
        if let Some(code) = dto.custom_code {
            request = request.with_custom_code(code);
        }
        if let Some(hours) = dto.expires_hours {
            request = request.with_expires_hours(hours);
        }
        request
    }
}

/// Result of a successful shorten call.
#[derive(Debug, Serialize)]
pub struct ShortenUrlResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<ShortenedUrl> for ShortenUrlResponse {
    fn from(result: ShortenedUrl) -> Self {
        Self {
            short_url: result.short_url,
            original_url: result.original_url,
            short_code: result.short_code,
            expires_at: result.expires_at,
        }
    }
}
