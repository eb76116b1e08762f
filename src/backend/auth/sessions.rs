/**
 * Identity Tokens
 *
 * This module issues and verifies the signed, time-limited JWTs that carry a
 * user's identity. Tokens are stateless: nothing is persisted, and every
 * verification recomputes the signature from the configured secret.
 *
 * A token is trusted only when both the signature and the expiry check pass.
 * Expiry is checked against the current wall clock with no grace period.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};

/// Lifetime of an issued token
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Identity recovered from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies identity tokens
///
/// Cheap to clone; the keys are shared.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service signing with `secret` (HS256)
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    /// Create a token for a user, valid for one hour from now
    pub fn create_token(&self, user_id: Uuid, email: &str) -> BackendResult<String> {
        self.create_token_at(user_id, email, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn create_token_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> BackendResult<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| BackendError::internal(format!("failed to sign token: {}", e)))
    }

    /// Verify a token and recover the identity it asserts
    ///
    /// Every failure (malformed, bad signature, expired, bad subject) is an
    /// authentication failure.
    pub fn verify_token(&self, token: &str) -> BackendResult<Identity> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.keys.decoding, &validation).map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            BackendError::unauthenticated("Not authenticated.")
        })?;

        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {}", e);
            BackendError::unauthenticated("Not authenticated.")
        })?;

        Ok(Identity {
            user_id,
            email: data.claims.email,
        })
    }
}
