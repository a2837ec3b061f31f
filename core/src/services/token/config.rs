//! Configuration for the token service

use cs2dle_shared::config::auth::{JwtConfig, DEFAULT_JWT_SECRET};
use jsonwebtoken::Algorithm;

use crate::domain::entities::session::SESSION_EXPIRY_HOURS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session token expiry in hours
    pub session_expiry_hours: i64,
    /// Issuer claim set on and required of every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            session_expiry_hours: SESSION_EXPIRY_HOURS,
            issuer: "cs2dle-admin".to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            session_expiry_hours: jwt.session_expiry_hours,
            issuer: jwt.issuer.clone(),
        }
    }
}
