use crate::error::{IdentityError, Result};

/// Token and credential policy, loaded once at startup and passed into the
/// service constructors. There is no ambient lookup at call time.
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret. Treated as a secret: redacted from Debug
    /// output and never logged.
    pub jwt_secret: String,
    /// Must match the `iss` claim on validation.
    pub jwt_issuer: String,
    /// Must match the `aud` claim on validation.
    pub jwt_audience: String,
    /// Token lifetime in minutes. Must be positive.
    pub token_ttl_minutes: i64,
    /// Bcrypt cost factor. Tuned so verification takes tens to hundreds of
    /// milliseconds on commodity hardware.
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `JWT_SECRET`, `JWT_ISSUER`, `JWT_AUDIENCE`,
    /// `TOKEN_TTL_MINUTES` (default 60), `BCRYPT_COST` (default
    /// [`bcrypt::DEFAULT_COST`]). Fails fast on missing or malformed
    /// values; the server refuses to start with an ill-defined policy.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            jwt_secret: require_var("JWT_SECRET")?,
            jwt_issuer: require_var("JWT_ISSUER")?,
            jwt_audience: require_var("JWT_AUDIENCE")?,
            token_ttl_minutes: parse_var("TOKEN_TTL_MINUTES", 60)?,
            bcrypt_cost: parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(IdentityError::Configuration(
                "JWT secret must not be empty".into(),
            ));
        }
        if self.jwt_issuer.trim().is_empty() {
            return Err(IdentityError::Configuration(
                "JWT issuer must not be empty".into(),
            ));
        }
        if self.jwt_audience.trim().is_empty() {
            return Err(IdentityError::Configuration(
                "JWT audience must not be empty".into(),
            ));
        }
        if self.token_ttl_minutes <= 0 {
            return Err(IdentityError::Configuration(
                "token TTL must be a positive number of minutes".into(),
            ));
        }
        // Bounds enforced by the bcrypt crate itself.
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(IdentityError::Configuration(
                "bcrypt cost must be between 4 and 31".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(IdentityError::Configuration(format!("{name} is not set"))),
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| IdentityError::Configuration(format!("{name} is not a valid number"))),
        Err(_) => Ok(default),
    }
}
