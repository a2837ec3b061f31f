//! Session token signing configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret for signing session tokens
    pub secret: String,

    /// Session lifetime in hours
    #[serde(default = "default_session_expiry_hours")]
    pub session_expiry_hours: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            session_expiry_hours: default_session_expiry_hours(),
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let session_expiry_hours = std::env::var("JWT_SESSION_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_session_expiry_hours);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| default_issuer());

        Self {
            secret,
            session_expiry_hours,
            issuer,
        }
    }

    /// Set the session lifetime in hours
    pub fn with_session_expiry_hours(mut self, hours: i64) -> Self {
        self.session_expiry_hours = hours;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Session token settings
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
        }
    }
}

fn default_session_expiry_hours() -> i64 {
    24
}

fn default_issuer() -> String {
    String::from("cs2dle-admin")
}
