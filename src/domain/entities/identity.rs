//! Authenticated identities and registered users.

use chrono::{DateTime, Utc};

/// A permission an identity may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// May post comments and replies. Granted to confirmed accounts.
    Writer,
}

/// The user behind a valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub capabilities: Vec<Capability>,
}

impl Identity {
    /// Builds an identity from an account's confirmation state.
    pub fn from_account(user_id: i64, username: String, confirmed: bool) -> Self {
        let capabilities = if confirmed {
            vec![Capability::Writer]
        } else {
            Vec::new()
        };

        Self {
            user_id,
            username,
            capabilities,
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}
