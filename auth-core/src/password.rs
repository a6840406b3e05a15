//! Password hashing and verification.
//!
//! Bcrypt produces a self-describing hash string (algorithm, cost factor,
//! and salt are embedded), so verification needs no side-channel lookup of
//! parameters. Password policy is not enforced here; the request
//! validation layer decides minimum length before these are invoked.

use crate::error::{IdentityError, Result};

/// Hash a plaintext password with a fresh random salt at the given cost.
///
/// Fails only if the bcrypt library itself errors, which indicates an
/// environment problem rather than bad user input.
pub fn hash(plaintext: &str, cost: u32) -> Result<String> {
    bcrypt::hash(plaintext, cost).map_err(|e| IdentityError::Hashing(e.to_string()))
}

/// Verify a plaintext password against a stored hash string.
///
/// Comparison is constant-time inside bcrypt. Any mismatch, including a
/// malformed hash string, is `false` rather than an error.
pub fn verify(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}
