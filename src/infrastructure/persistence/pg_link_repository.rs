//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::infrastructure::bounded;
use crate::utils::db_error::{is_unique_violation_on_code, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.code, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository over the `short_links` table.
///
/// Uniqueness of `code` is enforced by the `short_links_code_key` constraint.
/// A violation of that constraint is the only failure reported as
/// [`StoreError::DuplicateCode`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    ///
    /// `timeout` bounds every query issued by this repository.
    pub fn new(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let query = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO short_links (code, original_url)
            VALUES ($1, $2)
            RETURNING id, code, original_url, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref());

        let result = bounded(self.timeout, query).await?;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_code(&e) => {
                Err(StoreError::DuplicateCode(new_link.code))
            }
            Err(e) => Err(map_sqlx_error(e)),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let query = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, original_url, created_at
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref());

        let row = bounded(self.timeout, query).await?.map_err(map_sqlx_error)?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        let query = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, original_url, created_at
            FROM short_links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref());

        let rows = bounded(self.timeout, query).await?.map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn health_check(&self) -> bool {
        let query = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(self.pool.as_ref());

        matches!(bounded(self.timeout, query).await, Ok(Ok(1)))
    }
}
