//! CLI administration tool for short-url.
//!
//! Operates directly on the PostgreSQL backend through the same services the
//! HTTP server uses, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a short URL
//! cargo run --bin admin -- shorten https://example.com --code demo --expires-hours 24
//!
//! # Resolve a code (counts a click)
//! cargo run --bin admin -- expand demo
//!
//! # Inspect, list and manage
//! cargo run --bin admin -- info demo
//! cargo run --bin admin -- list
//! cargo run --bin admin -- deactivate demo
//! cargo run --bin admin -- delete demo
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//! - `BASE_URL`, `DEFAULT_CODE_LENGTH`, ... : same meaning as for the server

use short_url::application::services::{ShortenerService, StatsService};
use short_url::config::{self, Config};
use short_url::domain::clock::SystemClock;
use short_url::domain::entities::{ShortUrlInfo, ShortenRequest};
use short_url::infrastructure::persistence::PgShortUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short URL
    Shorten {
        /// Absolute http(s) URL to shorten
        url: String,

        /// Custom short code (letters and digits)
        #[arg(short, long)]
        code: Option<String>,

        /// Lifetime in hours
        #[arg(short, long)]
        expires_hours: Option<i64>,
    },

    /// Resolve a short code to its URL (counts a click)
    Expand { code: String },

    /// Show metadata for a short code
    Info { code: String },

    /// List all short URLs, newest first
    List,

    /// Show statistics
    Stats,

    /// Deactivate a short URL
    Deactivate { code: String },

    /// Permanently delete a short URL
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type Shortener = ShortenerService<PgShortUrlRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = match config.database_url.clone() {
        Some(url) => url,
        None => Config::load_database_url().context("DATABASE_URL must be set")?,
    };

    let pool = PgShortUrlRepository::connect(
        &database_url,
        config.db_max_connections,
        config.db_connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    let pool = Arc::new(pool);

    // `db` commands must work against an unmigrated database.
    if !matches!(cli.command, Commands::Db { .. }) {
        PgShortUrlRepository::run_migrations(&pool)
            .await
            .context("Failed to migrate")?;
    }

    let repo = Arc::new(PgShortUrlRepository::new(pool.clone()));
    let clock = Arc::new(SystemClock);
    let shortener = ShortenerService::new(repo.clone(), clock.clone(), config.shortener_settings());
    let stats = StatsService::new(repo, clock);

    match cli.command {
        Commands::Shorten {
            url,
            code,
            expires_hours,
        } => shorten(&shortener, url, code, expires_hours).await?,
        Commands::Expand { code } => expand(&shortener, &code).await?,
        Commands::Info { code } => info(&shortener, &code).await?,
        Commands::List => list(&shortener).await?,
        Commands::Stats => {
            let totals = stats
                .stats()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to compute stats: {}", e))?;

            println!("{}", "📊 Statistics".bright_blue().bold());
            println!();
            println!(
                "  Short URLs:   {}",
                totals.total_urls.to_string().bright_green().bold()
            );
            println!(
                "  Active:       {}",
                totals.active_urls.to_string().bright_green().bold()
            );
            println!(
                "  Total clicks: {}",
                totals.total_clicks.to_string().bright_green().bold()
            );
            println!();
        }
        Commands::Deactivate { code } => deactivate(&shortener, &code).await?,
        Commands::Delete { code, yes } => delete(&shortener, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn shorten(
    shortener: &Shortener,
    url: String,
    code: Option<String>,
    expires_hours: Option<i64>,
) -> Result<()> {
    let mut request = ShortenRequest::new(url);
    if let Some(code) = code {
        request = request.with_custom_code(code);
    }
    if let Some(hours) = expires_hours {
        request = request.with_expires_hours(hours);
    }

    let created = shortener
        .shorten(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!();
    println!("  Short URL: {}", created.short_url.bright_yellow().bold());
    println!("  Code:      {}", created.short_code.cyan());
    println!("  Target:    {}", created.original_url);
    if let Some(expires_at) = created.expires_at {
        println!(
            "  Expires:   {}",
            expires_at.format("%Y-%m-%d %H:%M UTC").to_string().bright_black()
        );
    }
    println!();

    Ok(())
}

async fn expand(shortener: &Shortener, code: &str) -> Result<()> {
    let target = shortener
        .expand(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match target {
        Some(url) => println!("{}", url),
        None => println!("{}", "❌ Not found, expired or inactive".red()),
    }

    Ok(())
}

async fn info(shortener: &Shortener, code: &str) -> Result<()> {
    let info = shortener
        .get_info(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short URL not found")?;

    println!("{}", "ℹ️  Short URL".bright_blue().bold());
    println!();
    println!(
        "  Short URL: {}",
        shortener.short_url_for(&info.short_code).bright_yellow()
    );
    println!("  Target:    {}", info.original_url);
    println!(
        "  Created:   {}",
        info.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    match info.expires_at {
        Some(expires_at) => println!(
            "  Expires:   {}",
            expires_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
        ),
        None => println!("  Expires:   {}", "never".bright_black()),
    }
    println!("  Clicks:    {}", info.click_count.to_string().bright_white().bold());
    println!("  Status:    {}", status_label(&info));
    println!();

    Ok(())
}

/// Lists every short URL with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   Code         Clicks   Created            Status    Target
///   ──────────────────────────────────────────────────────────────
///   demo         3        2025-01-15 10:30   ACTIVE    https://example.com
///   old          0        2025-01-14 09:00   EXPIRED   https://old.example.com
/// ```
async fn list(shortener: &Shortener) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let items = shortener
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if items.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<18} {:<9} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for item in &items {
        println!(
            "  {:<12} {:<8} {:<18} {:<9} {}",
            item.short_code.cyan(),
            item.click_count,
            item.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(item),
            item.original_url
        );
    }

    println!();
    println!("  Total: {}", items.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn deactivate(shortener: &Shortener, code: &str) -> Result<()> {
    let found = shortener
        .deactivate(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to deactivate: {}", e))?;

    if found {
        println!("{}", "✅ Short URL deactivated".green().bold());
    } else {
        println!("{}", "⚠️  Short URL not found".yellow());
    }

    Ok(())
}

/// Deletes a short URL after confirmation (default: No).
async fn delete(shortener: &Shortener, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short URL".bright_blue().bold());
    println!();

    let info = shortener
        .get_info(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short URL not found")?;

    println!("  Code:   {}", info.short_code.cyan());
    println!("  Target: {}", info.original_url);
    println!("  Clicks: {}", info.click_count.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = shortener
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete: {}", e))?;

    println!();
    if deleted {
        println!("{}", "✅ Short URL deleted".green().bold());
    } else {
        println!("{}", "⚠️  Short URL was already removed".yellow());
    }
    println!();

    Ok(())
}

fn status_label(info: &ShortUrlInfo) -> ColoredString {
    if !info.is_active {
        "INACTIVE".red()
    } else if info.is_expired {
        "EXPIRED".yellow()
    } else {
        "ACTIVE".green()
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
