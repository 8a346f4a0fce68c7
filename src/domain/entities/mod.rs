//! Core domain entities.
//!
//! Entities are plain data structures; the small amount of logic they carry
//! (expiry and usability checks) depends only on the time passed in.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A persisted short code to URL mapping
//! - [`ShortUrlInfo`] - Read-only view of a record with derived expiry state
//! - [`ShortenRequest`] / [`ShortenedUrl`] - Input and output of shortening
//! - [`UrlStats`] - Aggregate counters

pub mod short_url;
pub mod shorten;
pub mod url_stats;

pub use short_url::{ShortUrl, ShortUrlInfo};
pub use shorten::{ShortenRequest, ShortenedUrl};
pub use url_stats::UrlStats;
