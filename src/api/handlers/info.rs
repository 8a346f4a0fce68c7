//! Handler for per-code metadata.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::info::ShortUrlInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata for a short code without counting a click.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// Expired and deactivated codes are still reported, with `is_expired` and
/// `is_active` set accordingly.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlInfoResponse>, AppError> {
    let service = &state.shortener_service;

    let info = service
        .get_info(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

    let short_url = service.short_url_for(&info.short_code);

    Ok(Json(ShortUrlInfoResponse::new(info, short_url)))
}
