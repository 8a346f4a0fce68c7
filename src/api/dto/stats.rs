//! DTOs for aggregate statistics.

use serde::Serialize;

use crate::domain::entities::UrlStats;

/// Totals across every stored short URL.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_urls: u64,
    pub active_urls: u64,
    pub total_clicks: u64,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            total_urls: stats.total_urls,
            active_urls: stats.active_urls,
            total_clicks: stats.total_clicks,
        }
    }
}
