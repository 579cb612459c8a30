//! Access token issuing and validation (HS256).
//!
//! Tokens embed [`AccessClaims`] signed with a process-wide secret. The
//! expiry lives in the claims and is checked by [`validate_claims`], so the
//! library-level timestamp checks are disabled and `now` is always passed in
//! explicitly (deterministic tests).

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use quotehub_core::UserId;

use crate::claims::{AccessClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature verified but the claims failed (expired, bad window).
    #[error("token claims rejected: {0}")]
    Claims(#[from] TokenValidationError),

    /// Bad signature or malformed payload.
    #[error("malformed or badly signed token")]
    Malformed,
}

/// Validation seam used by the HTTP middleware.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError>;
}

/// HS256 token issuer/validator with a fixed time-to-live.
pub struct Hs256Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256Tokens {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a signed token for `user_id`, valid for the configured TTL.
    pub fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AccessClaims {
            sub: user_id,
            issued_at: now,
            expires_at: now + self.ttl,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Malformed)
    }
}

impl TokenValidator for Hs256Tokens {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is an RFC3339 claim checked below, not a numeric `exp`.
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        let data = jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Malformed)?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
