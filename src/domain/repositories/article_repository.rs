//! Repository trait for article data access.

use crate::domain::entities::Article;
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Which articles a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    All,
    Category(String),
    Tag(String),
}

/// Repository interface for reading articles.
///
/// Listings are ordered by publish time, newest first, with the id as a
/// tie-breaker so that pages are stable.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Lists one page of articles matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: &ArticleFilter, page: PageRequest)
    -> Result<Vec<Article>, AppError>;

    /// Counts all articles matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, filter: &ArticleFilter) -> Result<i64, AppError>;

    /// Finds an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError>;

    /// Returns the `limit` most recently published articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn latest(&self, limit: i64) -> Result<Vec<Article>, AppError>;

    /// Returns true if an article with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;
}
