//! Session identity and JWT claims.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session lifetime (24 hours)
pub const SESSION_EXPIRY_HOURS: i64 = 24;

/// Minimal identity returned by a successful authorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (admin user ID)
    pub sub: String,

    /// Admin email
    pub email: String,

    /// Admin display name
    pub name: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID
    pub jti: String,
}

impl SessionClaims {
    /// Creates claims for `identity` valid for `lifetime` from now
    pub fn new(identity: &SessionIdentity, issuer: &str, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the admin user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Rebuilds the identity carried by the token
    pub fn identity(&self) -> Result<SessionIdentity, uuid::Error> {
        Ok(SessionIdentity {
            id: self.user_id()?,
            email: self.email.clone(),
            name: self.name.clone(),
        })
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// A freshly signed session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    /// Encoded JWT
    pub token: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,

    /// Identity the token was issued for
    pub identity: SessionIdentity,
}
