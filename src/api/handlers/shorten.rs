//! Handler for the shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenUrlRequest, ShortenUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Custom codes that would shadow a fixed route.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "info", "api"];

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "demo",
///   "expires_hours": 24
/// }
/// ```
///
/// `custom_code` and `expires_hours` are optional.
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:3000/demo",
///   "original_url": "https://example.com",
///   "short_code": "demo",
///   "expires_at": "2025-01-02T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the custom code is reserved.
/// Returns 409 Conflict if the custom code is already taken.
/// Returns 500 Internal Server Error if no free code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenUrlRequest>,
) -> Result<Json<ShortenUrlResponse>, AppError> {
    payload.validate()?;

    if let Some(code) = payload.custom_code.as_deref()
        && RESERVED_CODES.contains(&code)
    {
        return Err(AppError::bad_request(
            "Custom code is reserved",
            json!({ "code": code }),
        ));
    }

    let result = state.shortener_service.shorten(payload.into()).await?;

    Ok(Json(result.into()))
}
