//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// `DashMap`-backed repository keyed by short code.
///
/// Each shard is guarded by its own lock, so the insert-if-absent in
/// [`ShortUrlRepository::create`] and the read-modify-write in
/// [`ShortUrlRepository::increment_clicks`] are atomic per key without a
/// global lock. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlRepository {
    records: DashMap<String, ShortUrl>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.get(code).map(|r| r.value().clone()))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.records.contains_key(code))
    }

    async fn create(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        match self.records.entry(record.short_code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": record.short_code }),
            )),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.records.remove(code).is_some())
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        match self.records.get_mut(code) {
            Some(mut record) => {
                record.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<u64>, AppError> {
        Ok(self.records.get_mut(code).map(|mut record| {
            record.click_count = record.click_count.saturating_add(1);
            record.click_count
        }))
    }

    async fn list(&self) -> Result<Vec<ShortUrl>, AppError> {
        let mut records: Vec<ShortUrl> = self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.short_code.cmp(&b.short_code))
        });
        Ok(records)
    }
}
