//! Session authentication for comment submissions.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::Identity;
use crate::domain::repositories::{Session, SessionRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes in a freshly generated session token.
const TOKEN_BYTES: usize = 32;

/// Service resolving `session` cookies to identities.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge sessions without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn SessionRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when sessions were created
    pub fn new(repository: Arc<dyn SessionRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Resolves a raw session token to the identity owning it.
    ///
    /// On success, updates the session's `last_used_at` timestamp. A failure
    /// to update is logged and does not reject the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Identity, AppError> {
        let token_hash = self.hash_token(token);

        let identity = self
            .repository
            .find_identity(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked session"}),
                )
            })?;

        if let Err(e) = self.repository.touch(&token_hash).await {
            tracing::warn!(user_id = identity.user_id, "Failed to touch session: {}", e);
        }

        Ok(identity)
    }

    /// Opens a session for a user and returns the raw token with the stored record.
    ///
    /// The raw token is never persisted; it must be handed to the user now.
    pub async fn open_session(&self, user_id: i64) -> Result<(String, Session), AppError> {
        let token = generate_token()?;
        let session = self
            .repository
            .create_session(user_id, &self.hash_token(&token))
            .await?;

        Ok((token, session))
    }

    /// Revokes every active session of a user, returning how many were revoked.
    pub async fn revoke_sessions(&self, user_id: i64) -> Result<u64, AppError> {
        self.repository.revoke_for_user(user_id).await
    }
}

/// Generates a URL-safe random session token (43 characters, 256 bits).
pub fn generate_token() -> Result<String, AppError> {
    let mut buffer = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate session token",
            json!({ "error": e.to_string() }),
        )
    })?;
    Ok(URL_SAFE_NO_PAD.encode(buffer))
}
