//! Handler for the service info endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::ServiceInfoResponse;
use crate::state::AppState;

/// Describes the running service.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        base_url: state.shortener_service.settings().base_url.clone(),
        storage: state.storage_backend.to_string(),
    })
}
