//! PostgreSQL implementation of the short URL repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Row shape of the `short_urls` table.
#[derive(Debug, sqlx::FromRow)]
struct ShortUrlRow {
    id: Uuid,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    click_count: i64,
    is_active: bool,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        Self {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            expires_at: row.expires_at,
            click_count: u64::try_from(row.click_count).unwrap_or_default(),
            is_active: row.is_active,
        }
    }
}

const SELECT_COLUMNS: &str =
    "id, original_url, short_code, created_at, expires_at, click_count, is_active";

/// PostgreSQL repository for short URL storage.
///
/// Uniqueness is enforced by the `UNIQUE` constraint on `short_code`, so
/// concurrent inserts of the same code resolve to one winner and a
/// [`AppError::Conflict`] for the rest. Click increments are a single
/// `UPDATE ... SET click_count = click_count + 1` statement.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached within
    /// `connect_timeout`.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(database_url)
            .await
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails to apply.
    pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(pool).await
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM short_urls WHERE short_code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM short_urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn create(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        let click_count = i64::try_from(record.click_count).unwrap_or(i64::MAX);

        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            INSERT INTO short_urls
                (id, original_url, short_code, created_at, expires_at, click_count, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(&record.original_url)
        .bind(&record.short_code)
        .bind(record.created_at)
        .bind(record.expires_at)
        .bind(click_count)
        .bind(record.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE short_urls SET is_active = FALSE WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<u64>, AppError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE short_urls
            SET click_count = click_count + 1
            WHERE short_code = $1
            RETURNING click_count
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(count.map(|c| u64::try_from(c).unwrap_or_default()))
    }

    async fn list(&self) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM short_urls ORDER BY created_at DESC, short_code COLLATE \"C\""
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }
}
