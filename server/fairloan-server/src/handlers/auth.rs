use auth_core::{AccountProfile, AuthGrant, NewAccount};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{api_success, ApiResponse, ApiResult};
use crate::server::AppState;
use crate::validation::RequestValidation;
use crate::{validate_email, validate_field, validate_length, validate_required};

/// Registration request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RequestValidation for RegisterRequest {
    fn validate(&self) -> Result<(), crate::error::ApiError> {
        validate_required!(self.email, "Email is required");
        validate_email!(self.email, "Invalid email format");
        validate_required!(self.first_name, "First name is required");
        validate_required!(self.last_name, "Last name is required");
        validate_length!(
            self.password,
            6,
            128,
            "Password must be between 6 and 128 characters"
        );
        Ok(())
    }
}

impl From<RegisterRequest> for NewAccount {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
        }
    }
}

/// Login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl RequestValidation for LoginRequest {
    fn validate(&self) -> Result<(), crate::error::ApiError> {
        validate_required!(self.email, "Email is required");
        validate_required!(self.password, "Password is required");
        Ok(())
    }
}

/// Authentication response: the bearer token plus the sanitized profile.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AccountProfile,
}

impl From<AuthGrant> for AuthResponse {
    fn from(grant: AuthGrant) -> Self {
        Self {
            token: grant.token,
            user: grant.account.into(),
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<ApiResponse<AuthResponse>>> {
    request.validate()?;

    let grant = state.identity.register(request.into()).await?;
    Ok(Json(api_success(grant.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthResponse>>> {
    request.validate()?;

    let grant = state
        .identity
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(api_success(grant.into())))
}
