//! Aggregate statistics over stored short URLs.

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::entities::UrlStats;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Service computing totals across every stored short URL.
pub struct StatsService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: ShortUrlRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Returns total, active and click totals.
    ///
    /// A record counts as active when it is not deactivated and not expired
    /// at the current clock time. Clicks are summed over all records,
    /// including expired and inactive ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn stats(&self) -> Result<UrlStats, AppError> {
        let records = self.repository.list().await?;
        let now = self.clock.now();

        Ok(records
            .iter()
            .fold(UrlStats::default(), |mut acc, record| {
                acc.total_urls += 1;
                if record.is_usable_at(now) {
                    acc.active_urls += 1;
                }
                acc.total_clicks = acc.total_clicks.saturating_add(record.click_count);
                acc
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::entities::ShortUrl;
    use crate::domain::repositories::MockShortUrlRepository;
    use chrono::{Duration, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn test_stats_empty() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = StatsService::new(Arc::new(repo), Arc::new(ManualClock::new(Utc::now())));
        let stats = service.stats().await.unwrap();

        assert_eq!(stats, UrlStats::default());
    }

    #[tokio::test]
    async fn test_stats_counts_active_and_clicks() {
        let now = Utc::now();

        let mut live = ShortUrl::new("https://a.com", "live", now, None);
        live.click_count = 5;
        let mut off = ShortUrl::new("https://b.com", "off", now, None);
        off.is_active = false;
        off.click_count = 2;
        let mut expired = ShortUrl::new(
            "https://c.com",
            "expired",
            now - Duration::hours(2),
            Some(now - Duration::hours(1)),
        );
        expired.click_count = 1;

        let mut repo = MockShortUrlRepository::new();
        repo.expect_list()
            .times(1)
            .returning(move || Ok(vec![live.clone(), off.clone(), expired.clone()]));

        let service = StatsService::new(Arc::new(repo), Arc::new(ManualClock::new(now)));
        let stats = service.stats().await.unwrap();

        assert_eq!(stats.total_urls, 3);
        assert_eq!(stats.active_urls, 1);
        assert_eq!(stats.total_clicks, 8);
    }

    #[tokio::test]
    async fn test_stats_follows_clock() {
        let start = Utc::now();
        let clock = Arc::new(ManualClock::new(start));
        let record = ShortUrl::new("https://a.com", "soon", start, Some(start + Duration::hours(1)));

        let mut repo = MockShortUrlRepository::new();
        repo.expect_list()
            .times(2)
            .returning(move || Ok(vec![record.clone()]));

        let service = StatsService::new(Arc::new(repo), clock.clone());
        assert_eq!(service.stats().await.unwrap().active_urls, 1);

        clock.advance(Duration::hours(1));
        assert_eq!(service.stats().await.unwrap().active_urls, 0);
    }

    #[tokio::test]
    async fn test_stats_propagates_storage_error() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = StatsService::new(Arc::new(repo), Arc::new(ManualClock::new(Utc::now())));

        assert!(service.stats().await.is_err());
    }
}
