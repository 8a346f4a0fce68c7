//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}` (also answers `HEAD`)
///
/// Responds with 307 Temporary Redirect so browsers come back through the
/// service and every visit is counted.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, expired or deactivated.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .shortener_service
        .expand(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

    Ok(Redirect::temporary(&original_url))
}
