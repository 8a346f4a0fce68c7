//! API route configuration.

use crate::api::handlers::{
    deactivate_link_handler, delete_link_handler, list_links_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /stats`                   - Aggregate totals
/// - `GET    /links`                   - List all short URLs, newest first
/// - `POST   /links/{code}/deactivate` - Deactivate a short URL
/// - `DELETE /links/{code}`            - Permanently delete a short URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{code}/deactivate", post(deactivate_link_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
