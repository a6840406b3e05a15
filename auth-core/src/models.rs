use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered identity as stored in the accounts table.
///
/// Never serialized to clients directly; use [`AccountProfile`] for
/// anything that leaves the service.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    /// Normalized (trimmed, lowercased) email. Unique across all accounts.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Bcrypt hash string. The only artifact of the password ever kept.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input to registration. Carries the plaintext password exactly as far as
/// the hash computation and no further.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Client-safe view of an account, excluding the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
        }
    }
}

/// Canonical form of an email address used for uniqueness checks, storage,
/// and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
