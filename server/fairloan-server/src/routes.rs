use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{auth, health, user},
    server::AppState,
};

/// Route path constants, grouped by area.
pub mod paths {
    pub mod auth {
        pub const REGISTER: &str = "/api/auth/register";
        pub const LOGIN: &str = "/api/auth/login";
    }

    pub mod user {
        pub const ME: &str = "/api/user/me";
    }

    pub mod health {
        pub const HEALTH: &str = "/health";
    }
}

/// Create health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route(paths::health::HEALTH, get(health::health_check))
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(paths::auth::REGISTER, post(auth::register))
        .route(paths::auth::LOGIN, post(auth::login))
}

/// Create authenticated user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(paths::user::ME, get(user::me))
}

/// Assemble all route groups
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
}
