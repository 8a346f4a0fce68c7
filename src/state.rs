//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::services::{ShortenerService, ShortenerSettings, StatsService};
use crate::domain::clock::Clock;
use crate::domain::repositories::ShortUrlRepository;

/// State cloned into every request handler.
///
/// Both services share one repository instance, so a short URL created
/// through one handler is immediately visible to the others.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<dyn ShortUrlRepository>>,
    pub stats_service: Arc<StatsService<dyn ShortUrlRepository>>,
    /// Name of the active storage backend, reported by `GET /`.
    pub storage_backend: &'static str,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        clock: Arc<dyn Clock>,
        settings: ShortenerSettings,
        storage_backend: &'static str,
    ) -> Self {
        Self {
            shortener_service: Arc::new(ShortenerService::new(
                repository.clone(),
                clock.clone(),
                settings,
            )),
            stats_service: Arc::new(StatsService::new(repository, clock)),
            storage_backend,
        }
    }
}
