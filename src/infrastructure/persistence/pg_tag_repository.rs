//! PostgreSQL implementation of tag repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// PostgreSQL repository for tag reads.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn distinct_names(&self) -> Result<Vec<String>, AppError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT name FROM tags ORDER BY name")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(names)
    }

    async fn for_article(&self, article_id: i64) -> Result<Vec<Tag>, AppError> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN article_tags atg ON atg.tag_id = t.id
            WHERE atg.article_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Tag::new(id, name))
            .collect())
    }
}
