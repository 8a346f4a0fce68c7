//! DTOs for per-code metadata and listings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrlInfo;

/// Metadata of a single short URL.
#[derive(Debug, Serialize)]
pub struct ShortUrlInfoResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: u64,
    pub is_active: bool,
    pub is_expired: bool,
}

impl ShortUrlInfoResponse {
    pub fn new(info: ShortUrlInfo, short_url: String) -> Self {
        Self {
            short_code: info.short_code,
            short_url,
            original_url: info.original_url,
            created_at: info.created_at,
            expires_at: info.expires_at,
            click_count: info.click_count,
            is_active: info.is_active,
            is_expired: info.is_expired,
        }
    }
}
