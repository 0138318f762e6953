//! PostgreSQL implementation of article repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Article;
use crate::domain::pagination::PageRequest;
use crate::domain::repositories::{ArticleFilter, ArticleRepository};
use crate::error::AppError;

/// PostgreSQL repository for article reads.
///
/// Category and tag filters are bound as nullable parameters so every listing
/// shares one statement shape.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    category: String,
    publish: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(r: ArticleRow) -> Self {
        Article::new(r.id, r.title, r.content, r.author, r.category, r.publish)
    }
}

/// Splits a filter into the `(category, tag)` bind parameters.
fn filter_params(filter: &ArticleFilter) -> (Option<&str>, Option<&str>) {
    match filter {
        ArticleFilter::All => (None, None),
        ArticleFilter::Category(category) => (Some(category.as_str()), None),
        ArticleFilter::Tag(tag) => (None, Some(tag.as_str())),
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> Result<Vec<Article>, AppError> {
        let (category, tag) = filter_params(filter);

        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT a.id, a.title, a.content, a.author, a.category, a.publish
            FROM articles a
            WHERE ($1::text IS NULL OR a.category = $1)
              AND ($2::text IS NULL OR a.id IN (
                    SELECT atg.article_id
                    FROM article_tags atg
                    JOIN tags t ON t.id = atg.tag_id
                    WHERE t.name = $2
              ))
            ORDER BY a.publish DESC, a.id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(category)
        .bind(tag)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn count(&self, filter: &ArticleFilter) -> Result<i64, AppError> {
        let (category, tag) = filter_params(filter);

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM articles a
            WHERE ($1::text IS NULL OR a.category = $1)
              AND ($2::text IS NULL OR a.id IN (
                    SELECT atg.article_id
                    FROM article_tags atg
                    JOIN tags t ON t.id = atg.tag_id
                    WHERE t.name = $2
              ))
            "#,
        )
        .bind(category)
        .bind(tag)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, author, category, publish
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Article::from))
    }

    async fn latest(&self, limit: i64) -> Result<Vec<Article>, AppError> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, author, category, publish
            FROM articles
            ORDER BY publish DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params() {
        assert_eq!(filter_params(&ArticleFilter::All), (None, None));
        assert_eq!(
            filter_params(&ArticleFilter::Category("rust".to_string())),
            (Some("rust"), None)
        );
        assert_eq!(
            filter_params(&ArticleFilter::Tag("axum".to_string())),
            (None, Some("axum"))
        );
    }
}
