use auth_core::AccountProfile;
use axum::Json;

use crate::error::{api_success, ApiResponse};
use crate::extract::AuthUser;

/// GET /api/user/me
///
/// Returns the sanitized profile of the account behind the presented
/// bearer token. The extractor has already rejected invalid tokens (401)
/// and vanished accounts (404).
pub async fn me(AuthUser(account): AuthUser) -> Json<ApiResponse<AccountProfile>> {
    Json(api_success(account.into()))
}
