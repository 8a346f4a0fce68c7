#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use short_url::application::services::{ShortenerService, ShortenerSettings, StatsService};
use short_url::domain::clock::ManualClock;
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;
use short_url::routes::router;
use short_url::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

pub fn test_settings() -> ShortenerSettings {
    ShortenerSettings {
        base_url: BASE_URL.to_string(),
        ..ShortenerSettings::default()
    }
}

/// Fixed point in time so expiry arithmetic in tests is deterministic.
pub fn start_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Services over a fresh in-memory repository and a manual clock.
pub struct TestEngine {
    pub repository: Arc<InMemoryShortUrlRepository>,
    pub clock: Arc<ManualClock>,
    pub shortener: ShortenerService<InMemoryShortUrlRepository>,
    pub stats: StatsService<InMemoryShortUrlRepository>,
}

pub fn create_test_engine() -> TestEngine {
    create_test_engine_with(test_settings())
}

pub fn create_test_engine_with(settings: ShortenerSettings) -> TestEngine {
    let repository = Arc::new(InMemoryShortUrlRepository::new());
    let clock = Arc::new(ManualClock::new(start_time()));

    TestEngine {
        shortener: ShortenerService::new(repository.clone(), clock.clone(), settings),
        stats: StatsService::new(repository.clone(), clock.clone()),
        repository,
        clock,
    }
}

pub fn create_test_state() -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let state = AppState::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        clock.clone(),
        test_settings(),
        "memory",
    );

    (state, clock)
}

/// Full application router over in-memory storage.
pub fn create_test_server() -> (TestServer, Arc<ManualClock>) {
    let (state, clock) = create_test_state();
    (TestServer::new(router(state)).unwrap(), clock)
}
