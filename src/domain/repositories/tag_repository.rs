//! Repository trait for tag data access.

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading tags.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Distinct tag names, alphabetically, for the navigation sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn distinct_names(&self) -> Result<Vec<String>, AppError>;

    /// Tags attached to one article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn for_article(&self, article_id: i64) -> Result<Vec<Tag>, AppError>;
}
