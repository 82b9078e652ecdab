//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token validity window in days.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_days: u64,
    /// Whether the session cookie carries the `Secure` attribute.
    ///
    /// Must be enabled in production deployments behind TLS.
    #[serde(default)]
    pub cookie_secure: bool,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_session_ttl() -> u64 {
    3
}
