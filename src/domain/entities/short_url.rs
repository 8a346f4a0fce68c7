//! Short URL entity and its read-only view.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted mapping from a short code to an original URL.
///
/// `id`, `original_url`, `short_code` and `created_at` never change after
/// creation. `click_count` only grows; `is_active` only goes from `true` to
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: u64,
    pub is_active: bool,
}

impl ShortUrl {
    /// Creates a fresh, active record with no clicks and a new random id.
    pub fn new(
        original_url: impl Into<String>,
        short_code: impl Into<String>,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_url: original_url.into(),
            short_code: short_code.into(),
            created_at,
            expires_at,
            click_count: 0,
            is_active: true,
        }
    }

    /// Returns true once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Returns true if the record may be expanded at `now`.
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired_at(now)
    }
}

/// Per-record metadata exposed by info and listing calls.
///
/// `is_expired` is derived at the time the view is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlInfo {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: u64,
    pub is_active: bool,
    pub is_expired: bool,
}

impl ShortUrlInfo {
    pub fn from_record(record: ShortUrl, now: DateTime<Utc>) -> Self {
        let is_expired = record.is_expired_at(now);
        Self {
            short_code: record.short_code,
            original_url: record.original_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
            click_count: record.click_count,
            is_active: record.is_active,
            is_expired,
        }
    }
}
