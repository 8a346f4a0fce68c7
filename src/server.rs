//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend selection, migrations, and Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::clock::SystemClock;
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::persistence::{InMemoryShortUrlRepository, PgShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (in-memory, or PostgreSQL with migrations applied)
/// - Shortener and stats services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let state = AppState::new(
        repository,
        Arc::new(SystemClock),
        config.shortener_settings(),
        config.storage_backend.as_str(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the repository selected by `STORAGE_BACKEND`.
async fn build_repository(config: &Config) -> Result<Arc<dyn ShortUrlRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryShortUrlRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres storage backend")?;

            let pool = PgShortUrlRepository::connect(
                database_url,
                config.db_max_connections,
                config.db_connect_timeout(),
            )
            .await
            .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            PgShortUrlRepository::run_migrations(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgShortUrlRepository::new(Arc::new(pool))))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
