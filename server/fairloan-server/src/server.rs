use std::sync::Arc;

use auth_core::{AccountRepository, AuthConfig, IdentityService, PgAccountRepository};
use sqlx::PgPool;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityService>,
}

impl AppState {
    /// Production wiring: identity service over the Postgres repository.
    pub fn new(pool: PgPool, config: &AuthConfig) -> Self {
        Self::with_repository(Arc::new(PgAccountRepository::new(pool)), config)
    }

    /// Wire the service over any repository implementation. Used by tests
    /// with the in-memory repository.
    pub fn with_repository(repo: Arc<dyn AccountRepository>, config: &AuthConfig) -> Self {
        Self {
            identity: Arc::new(IdentityService::new(repo, config)),
        }
    }
}
