//! FairLoan HTTP API server.
//!
//! Maps the identity service onto three routes: register, login, and
//! profile fetch, plus a liveness endpoint. All token transport is
//! bearer-style via the `Authorization` header.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod validation;

pub use error::{ApiError, ApiErrorResponse, ApiResponse, ApiResult};
pub use server::AppState;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

/// CORS policy for the browser front end.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
