//! Query Store — pluggable, trait-based persistence of submitted skills and their recommendation.
//!
//! Default: `SqliteQueryStore` over a sqlx pool.
//! `AppState` holds an `Arc<dyn QueryStore>` so handlers never touch SQL directly.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::query::{UserQuery, UserQueryRow};
use crate::recommendation::resolver::Career;

#[async_trait]
pub trait QueryStore: Send + Sync {
    /// Appends one submission and returns its assigned id.
    async fn save(&self, skills: &str, recommendation: Career) -> Result<i64, AppError>;

    /// Returns up to `limit` submissions, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<UserQuery>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<UserQuery>, AppError>;
}

pub struct SqliteQueryStore {
    pool: SqlitePool,
}

impl SqliteQueryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn into_query(row: UserQueryRow) -> Result<UserQuery, AppError> {
    UserQuery::try_from(row).map_err(|e| AppError::Persistence(sqlx::Error::Decode(Box::new(e))))
}

#[async_trait]
impl QueryStore for SqliteQueryStore {
    async fn save(&self, skills: &str, recommendation: Career) -> Result<i64, AppError> {
        let id = sqlx::query("INSERT INTO queries (skills, recommendation) VALUES (?, ?)")
            .bind(skills)
            .bind(recommendation.label())
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        info!("Recorded query {id} -> {recommendation}");
        Ok(id)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<UserQuery>, AppError> {
        let rows = sqlx::query_as::<_, UserQueryRow>(
            "SELECT id, skills, recommendation FROM queries ORDER BY id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(into_query).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<UserQuery>, AppError> {
        sqlx::query_as::<_, UserQueryRow>(
            "SELECT id, skills, recommendation FROM queries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(into_query)
        .transpose()
    }
}
