//! Repository trait for registered accounts.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for account management.
///
/// Used by the `admin` binary; the HTTP surface never writes accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        confirmed: bool,
    ) -> Result<User, AppError>;

    /// Finds an account by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Marks an account as confirmed, granting the writer capability.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account has this username.
    async fn confirm(&self, username: &str) -> Result<User, AppError>;

    /// Lists all accounts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
}
