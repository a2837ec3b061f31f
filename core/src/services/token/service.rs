//! Session token issuance and verification

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::session::{SessionClaims, SessionIdentity, SessionToken};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for signing and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        // No grace period: a token is accepted through its `exp` second and
        // rejected once the clock passes it
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Session lifetime
    pub fn session_lifetime(&self) -> Duration {
        Duration::hours(self.config.session_expiry_hours)
    }

    /// Signs a session token for `identity`
    pub fn issue(&self, identity: SessionIdentity) -> Result<SessionToken, DomainError> {
        let claims = SessionClaims::new(&identity, &self.config.issuer, self.session_lifetime());
        let token = self.encode_jwt(&claims)?;

        Ok(SessionToken {
            token,
            expires_at: claims.expires_at(),
            identity,
        })
    }

    pub(crate) fn encode_jwt(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()).into())
    }

    /// Verifies a session token and returns its claims
    ///
    /// # Returns
    /// * `Ok(SessionClaims)` - Signature, issuer and expiry all check out
    /// * `Err(TokenError::Expired)` - Token is past its expiry
    /// * `Err(TokenError::Invalid)` - Anything else wrong with the token
    pub fn verify(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        // Subject must be a well-formed account id
        token_data
            .claims
            .user_id()
            .map_err(|_| TokenError::Invalid)?;

        Ok(token_data.claims)
    }
}
