//! Repository trait for session tokens.

use crate::domain::entities::Identity;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A login session.
///
/// Only the HMAC of the raw cookie token is stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Repository interface for session management.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolves a token hash to the identity owning an active session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(identity))` if the session exists and is not revoked
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_identity(&self, token_hash: &str) -> Result<Option<Identity>, AppError>;

    /// Updates the `last_used_at` timestamp of a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Opens a new session for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the hash is already in use.
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn create_session(&self, user_id: i64, token_hash: &str) -> Result<Session, AppError>;

    /// Revokes every active session of a user. Returns how many were revoked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_for_user(&self, user_id: i64) -> Result<u64, AppError>;
}
