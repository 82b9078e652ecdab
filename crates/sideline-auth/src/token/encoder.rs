//! Session token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use sideline_core::config::auth::AuthConfig;
use sideline_core::error::AppError;

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session TTL in days.
    session_ttl_days: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("session_ttl_days", &self.session_ttl_days)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionToken {
    /// The signed token string.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: chrono::DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            session_ttl_days: config.session_ttl_days as i64,
        }
    }

    /// Issues a new session token bound to the given trainer.
    pub fn issue(&self, trainer_id: Uuid, username: &str) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.session_ttl_days);

        let claims = Claims {
            sub: trainer_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(SessionToken {
            token,
            expires_at: exp,
        })
    }
}
