//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Service info
//! - `GET  /health`       - Health check (storage probe)
//! - `POST /shorten`      - Create a short URL
//! - `GET  /info/{code}`  - Metadata for a short code
//! - `GET  /{code}`       - Short link redirect
//! - `/api/*`             - Stats and link management
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, info_handler, redirect_handler, root_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/info/demo/` reaches
/// the same handler as `/info/demo`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing, without path normalization.
///
/// Fixed routes take precedence over `/{code}`; the shorten handler refuses
/// custom codes that would collide with them.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/info/{code}", get(info_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
