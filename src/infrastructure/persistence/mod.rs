//! Short URL repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryShortUrlRepository`] - Process-local storage on a sharded `DashMap`
//! - [`PgShortUrlRepository`] - PostgreSQL storage using SQLx

pub mod memory_short_url_repository;
pub mod pg_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
