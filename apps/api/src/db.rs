use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const CREATE_QUERIES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS queries (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        skills         TEXT NOT NULL,
        recommendation TEXT NOT NULL
    )
"#;

/// Creates and returns a SQLite connection pool. The database file is created if missing.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    // Every connection to an in-memory database sees its own empty database.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 10 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `queries` table if it does not exist yet.
/// Run once during startup, before the router accepts traffic.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_QUERIES_TABLE)
        .execute(pool)
        .await
        .context("Failed to initialize database schema")?;

    info!("Database schema ready");
    Ok(())
}
