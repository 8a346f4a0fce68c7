//! Aggregate counters over all stored short URLs.

/// Totals computed by scanning storage.
///
/// `active_urls` counts records that are active and not expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlStats {
    pub total_urls: u64,
    pub active_urls: u64,
    pub total_clicks: u64,
}
