//! Signed bearer token issuance and validation.
//!
//! Tokens are HS256 JWTs signed with a symmetric secret known only to this
//! service. A token is a detached snapshot of the account at issuance time:
//! there is no revocation, so a leaked token stays valid until its natural
//! expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{IdentityError, Result};
use crate::models::Account;

/// Typed claim set embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the account id.
    pub sub: String,
    pub email: String,
    /// Fresh random id per issuance. Two tokens for the same account are
    /// always distinguishable.
    pub jti: String,
    pub first_name: String,
    pub last_name: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl AccessClaims {
    /// Parse the subject claim as an account id.
    pub fn account_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| IdentityError::InvalidToken)
    }
}

/// Issues and validates access tokens against a fixed policy.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        // Strict expiry: the jsonwebtoken default allows 60s of clock skew.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            ttl: Duration::minutes(config.token_ttl_minutes),
        }
    }

    /// Mint a signed token for the account, valid from now until now + TTL.
    pub fn issue(&self, account: &Account) -> Result<String> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            jti: Uuid::new_v4().to_string(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::Signing(e.to_string()))
    }

    /// Check signature, issuer, audience, and expiry, and return the claims.
    ///
    /// Every failure collapses to [`IdentityError::InvalidToken`] so callers
    /// probing token structure learn nothing about which check failed.
    pub fn validate(&self, token: &str) -> Result<AccessClaims> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| IdentityError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "token-test-secret".into(),
            jwt_issuer: "fairloan-api".into(),
            jwt_audience: "fairloan-ui".into(),
            token_ttl_minutes: 60,
            bcrypt_cost: 4,
        }
    }

    fn test_account() -> Account {
        Account {
            id: Uuid::new_v4(),
            email: "jo@example.com".into(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            password_hash: "$2b$04$placeholderplaceholderplae".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_validates_with_matching_subject() {
        let service = TokenService::new(&test_config());
        let account = test_account();

        let token = service.issue(&account).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), account.id);
        assert_eq!(claims.email, account.email);
        assert_eq!(claims.first_name, "Jo");
        assert_eq!(claims.last_name, "Doe");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tokens_for_the_same_account_are_distinct() {
        let service = TokenService::new(&test_config());
        let account = test_account();

        let first = service.issue(&account).unwrap();
        let second = service.issue(&account).unwrap();
        assert_ne!(first, second);

        let first_jti = service.validate(&first).unwrap().jti;
        let second_jti = service.validate(&second).unwrap().jti;
        assert_ne!(first_jti, second_jti);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        let service = TokenService::new(&config);
        let account = test_account();

        let now = Utc::now();
        let claims = AccessClaims {
            sub: account.id.to_string(),
            email: account.email,
            jti: Uuid::new_v4().to_string(),
            first_name: account.first_name,
            last_name: account.last_name,
            iat: (now - Duration::minutes(10)).timestamp(),
            exp: (now - Duration::minutes(5)).timestamp(),
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.validate(&token),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn token_signed_with_different_secret_is_rejected() {
        let mut other_config = test_config();
        other_config.jwt_secret = "some-other-secret".into();

        let issuer = TokenService::new(&other_config);
        let validator = TokenService::new(&test_config());

        let token = issuer.issue(&test_account()).unwrap();
        assert!(matches!(
            validator.validate(&token),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn token_with_mismatched_audience_is_rejected() {
        let mut other_config = test_config();
        other_config.jwt_audience = "some-other-app".into();

        let issuer = TokenService::new(&other_config);
        let validator = TokenService::new(&test_config());

        let token = issuer.issue(&test_account()).unwrap();
        assert!(matches!(
            validator.validate(&token),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn token_with_mismatched_issuer_is_rejected() {
        let mut other_config = test_config();
        other_config.jwt_issuer = "some-other-issuer".into();

        let issuer = TokenService::new(&other_config);
        let validator = TokenService::new(&test_config());

        let token = issuer.issue(&test_account()).unwrap();
        assert!(matches!(
            validator.validate(&token),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new(&test_config());
        assert!(matches!(
            service.validate("garbage"),
            Err(IdentityError::InvalidToken)
        ));
        assert!(matches!(
            service.validate(""),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn malformed_subject_claim_fails_extraction() {
        let config = test_config();
        let service = TokenService::new(&config);

        let now = Utc::now();
        let claims = AccessClaims {
            sub: "not-a-uuid".into(),
            email: "jo@example.com".into(),
            jti: Uuid::new_v4().to_string(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(5)).timestamp(),
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let claims = service.validate(&token).unwrap();
        assert!(matches!(
            claims.account_id(),
            Err(IdentityError::InvalidToken)
        ));
    }
}
