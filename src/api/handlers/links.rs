//! Handlers for link management endpoints (list, deactivate, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::info::ShortUrlInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short URL, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Includes expired and deactivated entries.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortUrlInfoResponse>>, AppError> {
    let service = &state.shortener_service;

    let items = service
        .list_all()
        .await?
        .into_iter()
        .map(|info| {
            let short_url = service.short_url_for(&info.short_code);
            ShortUrlInfoResponse::new(info, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Deactivates a short URL. It stays visible in listings but no longer
/// redirects.
///
/// # Endpoint
///
/// `POST /api/links/{code}/deactivate`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn deactivate_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.shortener_service.deactivate(&code).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ))
    }
}

/// Permanently removes a short URL.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.shortener_service.delete(&code).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ))
    }
}
