//! Account persistence seam.
//!
//! The one-account-per-email invariant is owned by the database: the unique
//! index over the normalized email column is the source of truth, and
//! concurrent registrations racing to the same email are settled there, not
//! by an application-level pre-check.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{IdentityError, Result};
use crate::models::Account;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account. Returns [`IdentityError::DuplicateEmail`] if
    /// the normalized email is already taken, without writing anything.
    async fn insert(&self, account: &Account) -> Result<Account>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;

    /// Lookup by normalized email. Callers normalize before calling.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;
}

/// Postgres-backed repository.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn insert(&self, account: &Account) -> Result<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, email, first_name, last_name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, first_name, last_name, password_hash, created_at
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                IdentityError::DuplicateEmail
            }
            other => IdentityError::Database(other),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, first_name, last_name, password_hash, created_at \
             FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, first_name, last_name, password_hash, created_at \
             FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }
}

/// In-memory repository for tests and local development. Mirrors the
/// database's unique-email behavior.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop an account, simulating out-of-band deletion. Used to exercise
    /// the valid-token-over-missing-account path.
    pub async fn remove(&self, id: Uuid) {
        self.accounts.write().await.remove(&id);
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.email == account.email) {
            return Err(IdentityError::DuplicateEmail);
        }
        accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.email == email)
            .cloned())
    }
}
