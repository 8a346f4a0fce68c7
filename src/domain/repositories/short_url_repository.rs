//! Repository trait for short URL storage.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short URL records.
///
/// The repository is the single source of truth for existence and
/// uniqueness of short codes. Implementations must be safe to share between
/// concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - `DashMap` backed
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Finds a record by its short code.
    ///
    /// Returns the record regardless of expiry or active state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns true if a record with this code exists.
    ///
    /// Only an optimization for callers; [`Self::create`] is the
    /// authoritative uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Persists a new record, keyed by its `short_code`.
    ///
    /// Either the whole record is stored or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already present.
    /// Returns [`AppError::Internal`] on backend errors.
    async fn create(&self, record: ShortUrl) -> Result<ShortUrl, AppError>;

    /// Removes a record entirely.
    ///
    /// Returns `Ok(false)` if no record had this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Marks a record inactive without removing it.
    ///
    /// Returns `Ok(false)` if no record had this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn deactivate(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically adds one to the record's click count.
    ///
    /// Returns the new count, or `Ok(None)` if no record had this code.
    /// Concurrent calls on the same code must never lose an increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<u64>, AppError>;

    /// Lists every stored record, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn list(&self) -> Result<Vec<ShortUrl>, AppError>;
}
