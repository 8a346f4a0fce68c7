//! Short URL creation, expansion and lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{ShortUrl, ShortUrlInfo, ShortenRequest, ShortenedUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, DEFAULT_MAX_CUSTOM_CODE_LENGTH, generate_code, is_valid_short_code,
};
use crate::utils::url_validator::is_valid_url;

/// Tunables of the shortening engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerSettings {
    /// Prefix for returned short URLs; a trailing `/` is ignored.
    pub base_url: String,
    pub default_code_length: usize,
    pub max_custom_code_length: usize,
    /// Generation attempts before giving up with an internal error.
    pub max_generation_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            default_code_length: DEFAULT_CODE_LENGTH,
            max_custom_code_length: DEFAULT_MAX_CUSTOM_CODE_LENGTH,
            max_generation_attempts: 10,
        }
    }
}

/// The shortening engine.
///
/// Orchestrates validation, code generation with collision retry, expiry
/// calculation and storage calls. Holds no locks of its own: uniqueness is
/// decided by [`ShortUrlRepository::create`] and click counting by
/// [`ShortUrlRepository::increment_clicks`].
pub struct ShortenerService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    settings: ShortenerSettings,
}

impl<R: ShortUrlRepository + ?Sized> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, settings: ShortenerSettings) -> Self {
        Self {
            repository,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Creates a short URL.
    ///
    /// # Code Selection
    ///
    /// - With a custom code: the code is validated and must not be taken.
    ///   It is never replaced or suffixed.
    /// - Without one: a random code is generated, retrying on collision up to
    ///   `max_generation_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is not an absolute HTTP(S) URL
    /// - Custom code is malformed
    /// - `expires_hours` is zero or negative
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    ///
    /// Returns [`AppError::Internal`] if generation attempts are exhausted or
    /// storage fails.
    pub async fn shorten(&self, request: ShortenRequest) -> Result<ShortenedUrl, AppError> {
        if !is_valid_url(request.url()) {
            return Err(AppError::bad_request(
                "Invalid URL provided",
                json!({ "url": request.url() }),
            ));
        }

        let now = self.clock.now();
        let expires_at = expiry_from_hours(now, request.expires_hours())?;

        let record = match request.custom_code() {
            Some(code) => {
                self.create_with_custom_code(request.url(), code, now, expires_at)
                    .await?
            }
            None => {
                self.create_with_generated_code(request.url(), now, expires_at)
                    .await?
            }
        };

        debug!(
            code = %record.short_code,
            url = %record.original_url,
            "Shortened URL"
        );

        Ok(ShortenedUrl {
            short_url: self.short_url_for(&record.short_code),
            original_url: record.original_url,
            short_code: record.short_code,
            expires_at: record.expires_at,
        })
    }

    /// Resolves a short code to its original URL and counts the click.
    ///
    /// Unknown, expired and inactive codes yield `Ok(None)` and leave the
    /// record untouched. Expired records are not deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn expand(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(record) = self.repository.find_by_code(code).await? else {
            debug!(code, "Short code not found");
            return Ok(None);
        };

        if record.is_expired_at(self.clock.now()) {
            debug!(code, "Short code expired");
            return Ok(None);
        }

        if !record.is_active {
            debug!(code, "Short code inactive");
            return Ok(None);
        }

        match self.repository.increment_clicks(code).await? {
            Some(clicks) => {
                debug!(code, clicks, "Expanded short code");
                Ok(Some(record.original_url))
            }
            None => {
                debug!(code, "Short code removed during expansion");
                Ok(None)
            }
        }
    }

    /// Returns metadata for a short code without counting a click.
    ///
    /// Expired and inactive records are still returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_info(&self, code: &str) -> Result<Option<ShortUrlInfo>, AppError> {
        let record = self.repository.find_by_code(code).await?;
        let now = self.clock.now();

        Ok(record.map(|r| ShortUrlInfo::from_record(r, now)))
    }

    /// Soft-deletes a short URL: it stays queryable but no longer expands.
    ///
    /// Returns `Ok(false)` if the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let deactivated = self.repository.deactivate(code).await?;
        if deactivated {
            debug!(code, "Deactivated short code");
        } else {
            debug!(code, "Short code not found for deactivation");
        }
        Ok(deactivated)
    }

    /// Removes a short URL entirely.
    ///
    /// Returns `Ok(false)` if the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let deleted = self.repository.delete(code).await?;
        if deleted {
            debug!(code, "Deleted short code");
        } else {
            debug!(code, "Short code not found for deletion");
        }
        Ok(deleted)
    }

    /// Lists every stored short URL, newest first, including expired and
    /// inactive ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<ShortUrlInfo>, AppError> {
        let records = self.repository.list().await?;
        let now = self.clock.now();

        Ok(records
            .into_iter()
            .map(|r| ShortUrlInfo::from_record(r, now))
            .collect())
    }

    /// Checks that storage answers a single-key lookup.
    ///
    /// Used by health checks; never scans the whole store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend is unreachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.exists("health").await.map(|_| ())
    }

    /// Builds the public short URL for a code.
    pub fn short_url_for(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    async fn create_with_custom_code(
        &self,
        url: &str,
        code: &str,
        now: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortUrl, AppError> {
        if !is_valid_short_code(code, self.settings.max_custom_code_length) {
            return Err(AppError::bad_request(
                format!(
                    "Custom code must be 1-{} ASCII letters or digits",
                    self.settings.max_custom_code_length
                ),
                json!({ "code": code }),
            ));
        }

        if self.repository.exists(code).await? {
            return Err(custom_code_taken(code));
        }

        let record = ShortUrl::new(url, code, now, expires_at);

        // A concurrent shorten may have claimed the code since the check.
        self.repository.create(record).await.map_err(|e| {
            if e.is_conflict() {
                custom_code_taken(code)
            } else {
                e
            }
        })
    }

    async fn create_with_generated_code(
        &self,
        url: &str,
        now: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortUrl, AppError> {
        let max_attempts = self.settings.max_generation_attempts;

        for attempt in 1..=max_attempts {
            let code = generate_code(self.settings.default_code_length);

            if self.repository.exists(&code).await? {
                warn!(attempt, code = %code, "Generated code already exists, retrying");
                continue;
            }

            let record = ShortUrl::new(url, code, now, expires_at);

            match self.repository.create(record).await {
                Ok(created) => return Ok(created),
                Err(e) if e.is_conflict() => {
                    warn!(attempt, "Generated code claimed concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(attempts = max_attempts, "Code space exhausted");

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "code space exhausted", "attempts": max_attempts }),
        ))
    }
}

fn custom_code_taken(code: &str) -> AppError {
    AppError::conflict(
        format!("Short code '{code}' already exists"),
        json!({ "code": code }),
    )
}

/// Computes `now + hours`, rejecting non-positive or out-of-range values.
fn expiry_from_hours(
    now: DateTime<Utc>,
    hours: Option<i64>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(hours) = hours else {
        return Ok(None);
    };

    if hours <= 0 {
        return Err(AppError::bad_request(
            "expires_hours must be a positive number of hours",
            json!({ "expires_hours": hours }),
        ));
    }

    Duration::try_hours(hours)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(Some)
        .ok_or_else(|| {
            AppError::bad_request(
                "expires_hours is too large",
                json!({ "expires_hours": hours }),
            )
        })
}
