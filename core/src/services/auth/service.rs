//! Main authentication service implementation

use chrono::Utc;
use cs2dle_shared::mask_email;
use std::sync::Arc;

use crate::domain::entities::session::{SessionIdentity, SessionToken};
use crate::domain::entities::verification_code::CodeType;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{AdminUserRepository, VerificationCodeRepository};
use crate::services::token::TokenService;
use crate::services::verification::{claim, find_unexpired};

/// Authentication service for the code-based signin flow
pub struct AuthService<C, U>
where
    C: VerificationCodeRepository,
    U: AdminUserRepository,
{
    /// Verification code storage
    code_repository: Arc<C>,
    /// Admin account storage
    user_repository: Arc<U>,
    /// Session token signing
    token_service: Arc<TokenService>,
}

impl<C, U> AuthService<C, U>
where
    C: VerificationCodeRepository,
    U: AdminUserRepository,
{
    /// Create a new authentication service
    pub fn new(
        code_repository: Arc<C>,
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            code_repository,
            user_repository,
            token_service,
        }
    }

    /// Token service used to sign and verify sessions
    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Authorize an admin with an emailed signin code
    ///
    /// The code is consumed only after the account checks pass; an unknown
    /// or inactive account leaves the code in place.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionIdentity)` - The authenticated admin
    /// * `Err(AuthError::InvalidCode)` - No matching signin code, or lost a race
    /// * `Err(AuthError::CodeExpired)` - Matching code past its expiry
    /// * `Err(AuthError::AccountNotFound)` - No account for the email
    /// * `Err(AuthError::AccountInactive)` - Account is not `Active`
    pub async fn authorize(&self, email: &str, code: &str) -> DomainResult<SessionIdentity> {
        let stored = find_unexpired(
            self.code_repository.as_ref(),
            email,
            code,
            CodeType::Signin,
            Utc::now(),
        )
        .await?;

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !user.is_active() {
            tracing::warn!(
                email = %mask_email(email),
                user_id = %user.id,
                status = %user.status,
                event = "inactive_account_signin",
                "Signin attempt for inactive admin account"
            );
            return Err(AuthError::AccountInactive.into());
        }

        claim(self.code_repository.as_ref(), &stored).await?;

        Ok(user.identity())
    }

    /// Authorize and issue a session token
    pub async fn sign_in(&self, email: &str, code: &str) -> DomainResult<SessionToken> {
        let identity = self.authorize(email, code).await?;
        let session = self.token_service.issue(identity)?;

        tracing::info!(
            email = %mask_email(email),
            user_id = %session.identity.id,
            expires_at = %session.expires_at,
            event = "session_issued",
            "Admin signed in"
        );

        Ok(session)
    }
}
