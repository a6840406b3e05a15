use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{IdentityError, Result};
use crate::models::{normalize_email, Account, NewAccount};
use crate::password;
use crate::repository::AccountRepository;
use crate::token::TokenService;

/// A freshly authenticated identity: the account plus the bearer token
/// minted for it.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub account: Account,
    pub token: String,
}

/// Orchestrates the credential manager, token issuer, and account store.
///
/// Holds no mutable state of its own; safe to share across concurrent
/// requests behind an `Arc`.
pub struct IdentityService {
    repo: Arc<dyn AccountRepository>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl IdentityService {
    pub fn new(repo: Arc<dyn AccountRepository>, config: &AuthConfig) -> Self {
        Self {
            repo,
            tokens: TokenService::new(config),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// Create an account and mint its first token.
    ///
    /// The email is normalized before storage; duplicate detection is
    /// delegated to the repository's unique constraint so concurrent
    /// registrations with the same email cannot both succeed.
    pub async fn register(&self, new: NewAccount) -> Result<AuthGrant> {
        let password_hash = password::hash(&new.password, self.bcrypt_cost)?;

        let account = Account {
            id: Uuid::new_v4(),
            email: normalize_email(&new.email),
            first_name: new.first_name,
            last_name: new.last_name,
            password_hash,
            created_at: Utc::now(),
        };

        let account = self.repo.insert(&account).await?;
        info!(account_id = %account.id, "account registered");

        let token = self.tokens.issue(&account)?;
        Ok(AuthGrant { account, token })
    }

    /// Verify credentials and mint a token.
    ///
    /// Unknown email and wrong password return the identical
    /// [`IdentityError::InvalidCredentials`] so the response does not leak
    /// whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthGrant> {
        let account = self
            .repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !password::verify(password, &account.password_hash) {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self.tokens.issue(&account)?;
        Ok(AuthGrant { account, token })
    }

    /// Validate a presented bearer token and load the account it asserts.
    ///
    /// A well-signed, unexpired token over an account that has since
    /// vanished is [`IdentityError::AccountNotFound`], distinct from an
    /// invalid token.
    pub async fn authorize(&self, token: &str) -> Result<Account> {
        let claims = self.tokens.validate(token)?;
        let id = claims.account_id()?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::AccountNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryAccountRepository;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "service-test-secret".into(),
            jwt_issuer: "fairloan-api".into(),
            jwt_audience: "fairloan-ui".into(),
            token_ttl_minutes: 60,
            bcrypt_cost: 4,
        }
    }

    fn test_service() -> (IdentityService, InMemoryAccountRepository) {
        let repo = InMemoryAccountRepository::new();
        let service = IdentityService::new(Arc::new(repo.clone()), &test_config());
        (service, repo)
    }

    fn jo_doe() -> NewAccount {
        NewAccount {
            email: "a@x.com".into(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn register_stores_hash_not_plaintext() {
        let (service, _) = test_service();
        let grant = service.register(jo_doe()).await.unwrap();

        assert_ne!(grant.account.password_hash, "secret1");
        assert!(!grant.account.password_hash.is_empty());
        assert!(password::verify("secret1", &grant.account.password_hash));
    }

    #[tokio::test]
    async fn register_normalizes_email() {
        let (service, _) = test_service();
        let mut new = jo_doe();
        new.email = "  A@X.Com ".into();

        let grant = service.register(new).await.unwrap();
        assert_eq!(grant.account.email, "a@x.com");
    }

    #[tokio::test]
    async fn duplicate_registration_fails_and_writes_nothing() {
        let (service, repo) = test_service();
        service.register(jo_doe()).await.unwrap();

        // Case variant of the same address collides after normalization.
        let mut again = jo_doe();
        again.email = "A@x.com".into();
        assert!(matches!(
            service.register(again).await,
            Err(IdentityError::DuplicateEmail)
        ));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn login_returns_a_fresh_token() {
        let (service, _) = test_service();
        let registered = service.register(jo_doe()).await.unwrap();

        let logged_in = service.login("a@x.com", "secret1").await.unwrap();
        assert_eq!(logged_in.account.id, registered.account.id);
        assert_ne!(logged_in.token, registered.token);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let (service, _) = test_service();
        service.register(jo_doe()).await.unwrap();

        let absent = service.login("nobody@x.com", "secret1").await;
        let mismatch = service.login("a@x.com", "wrong").await;

        assert!(matches!(absent, Err(IdentityError::InvalidCredentials)));
        assert!(matches!(mismatch, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn authorize_resolves_the_issuing_account() {
        let (service, _) = test_service();
        let grant = service.register(jo_doe()).await.unwrap();

        let account = service.authorize(&grant.token).await.unwrap();
        assert_eq!(account.id, grant.account.id);
        assert_eq!(account.email, "a@x.com");
    }

    #[tokio::test]
    async fn authorize_rejects_garbage_tokens() {
        let (service, _) = test_service();
        assert!(matches!(
            service.authorize("garbage").await,
            Err(IdentityError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn valid_token_over_removed_account_is_not_found() {
        let (service, repo) = test_service();
        let grant = service.register(jo_doe()).await.unwrap();

        repo.remove(grant.account.id).await;
        assert!(matches!(
            service.authorize(&grant.token).await,
            Err(IdentityError::AccountNotFound)
        ));
    }
}
