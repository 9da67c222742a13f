//! Token Issuance and Verification
//!
//! HS256-signed JWTs with a 24 hour lifetime. Verification runs the cheap
//! header-shape checks before any cryptographic work and accepts only the
//! HMAC algorithm the service signs with, so a token re-signed under a
//! different algorithm is rejected outright.

use anyhow::Context;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};

/// Token lifetime in seconds (24 hours).
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims carried by an access token. `admin` is always issued as false;
/// the claim exists so the handler layer can read it per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,
    pub admin: bool,
    pub exp: i64,
}

pub struct TokenAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenAuthority {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for `subject` expiring 24 hours from now.
    pub fn issue(&self, subject: &str) -> Result<String> {
        let claims = Claims {
            name: subject.to_string(),
            admin: false,
            exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .context("failed to sign token")
            .map_err(ServiceError::Backend)
    }

    /// Verifies the raw `Authorization` header value and returns the decoded
    /// claims for request-scoped use.
    ///
    /// Fails with `Unauthorized` when the header is absent, lacks the
    /// `Bearer ` prefix, carries a bad signature or a non-HS256 algorithm,
    /// or is past its expiry (no leeway).
    pub fn verify(&self, header: Option<&str>) -> Result<Claims> {
        let header = header.ok_or(ServiceError::Unauthorized("Authorization token missing"))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ServiceError::Unauthorized("Invalid authorization token format"))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("token rejected: {}", err);
                ServiceError::Unauthorized("Invalid token")
            })
    }
}
