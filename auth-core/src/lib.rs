//! Identity management and user authentication for the FairLoan platform.
//!
//! This crate provides the security core of the service:
//! - Account registration and credential verification (bcrypt)
//! - Signed bearer token issuance and validation (HS256 JWT)
//! - The account repository seam backed by Postgres
//!
//! All state lives in the external store or is local to a call, so the
//! service types are safe to share across concurrent requests.

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::{IdentityError, Result};
pub use models::{Account, AccountProfile, NewAccount};
pub use repository::{AccountRepository, InMemoryAccountRepository, PgAccountRepository};
pub use service::{AuthGrant, IdentityService};
pub use token::{AccessClaims, TokenService};
