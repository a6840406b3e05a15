//! Bearer-token extractor for authenticated endpoints.
//!
//! The token is read only from the caller-supplied `Authorization` header;
//! handlers never parse it themselves.

use auth_core::Account;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::ApiError;
use crate::server::AppState;

/// The authenticated account behind the presented bearer token.
///
/// Usage:
/// ```rust,ignore
/// pub async fn handler(AuthUser(account): AuthUser) -> ... { }
/// ```
pub struct AuthUser(pub Account);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::authentication("Missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::authentication("Invalid authorization header"))?;

        let account = state.identity.authorize(token).await?;
        Ok(AuthUser(account))
    }
}
