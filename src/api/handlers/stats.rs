//! Handler for aggregate statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns totals across all short URLs.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// { "total_urls": 3, "active_urls": 2, "total_clicks": 10 }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.stats().await?;

    Ok(Json(stats.into()))
}
