//! Application layer services implementing business logic.
//!
//! Services consume the [`ShortUrlRepository`](crate::domain::repositories::ShortUrlRepository)
//! trait and a [`Clock`](crate::domain::clock::Clock), and provide the API used by the
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short URL creation, expansion and lifecycle
//! - [`services::stats_service::StatsService`] - Aggregate totals across all short URLs

pub mod services;
