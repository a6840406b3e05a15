use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    /// Registration collided with an existing account for the same
    /// normalized email. Surfaced from the database unique constraint.
    #[error("Email already in use")]
    DuplicateEmail,

    /// Login failed. Covers both unknown email and wrong password so the
    /// response does not reveal whether an account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token validation failed. Signature, issuer, audience, and expiry
    /// failures all collapse here.
    #[error("Invalid token")]
    InvalidToken,

    /// A valid token referenced an account that no longer exists.
    #[error("Account not found")]
    AccountNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The hashing library rejected well-formed input. This is environment
    /// corruption, not a user-input condition.
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Token signing failed on well-formed claims. Same category as
    /// hashing failures: unexpected, not part of the caller taxonomy.
    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, IdentityError>;
