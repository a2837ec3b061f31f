//! Main verification service implementation

use chrono::Utc;
use cs2dle_shared::mask_email;
use std::sync::Arc;

use crate::domain::entities::admin_user::AdminUser;
use crate::domain::entities::verification_code::CodeType;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{AdminUserRepository, VerificationCodeRepository};

use super::lookup::{claim, find_unexpired};
use super::types::{VerificationOutcome, VerifyCodeCommand};

/// Service that checks emailed codes and completes signup
pub struct VerificationService<C, U>
where
    C: VerificationCodeRepository,
    U: AdminUserRepository,
{
    code_repository: Arc<C>,
    user_repository: Arc<U>,
}

impl<C, U> VerificationService<C, U>
where
    C: VerificationCodeRepository,
    U: AdminUserRepository,
{
    /// Create a new verification service
    pub fn new(code_repository: Arc<C>, user_repository: Arc<U>) -> Self {
        Self {
            code_repository,
            user_repository,
        }
    }

    /// Verify a signup or signin code
    ///
    /// Signup requires a non-blank username, checked before the code is
    /// looked up. On success the code is consumed; every failure leaves it
    /// in place.
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationOutcome::SignedUp)` - Account created for the email
    /// * `Ok(VerificationOutcome::SignedIn)` - Signin code accepted
    /// * `Err(AuthError::MissingUsername)` - Signup without a username
    /// * `Err(AuthError::InvalidCode)` - No matching code, or lost a race
    /// * `Err(AuthError::CodeExpired)` - Matching code past its expiry
    /// * `Err(AuthError::AccountAlreadyExists)` - Signup for a taken email
    pub async fn verify_code(
        &self,
        command: VerifyCodeCommand,
    ) -> DomainResult<VerificationOutcome> {
        let username = match command.code_type {
            CodeType::Signup => match command.username.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => Some(name.to_string()),
                _ => return Err(AuthError::MissingUsername.into()),
            },
            CodeType::Signin => None,
        };

        let stored = find_unexpired(
            self.code_repository.as_ref(),
            &command.email,
            &command.code,
            command.code_type,
            Utc::now(),
        )
        .await
        .map_err(|e| {
            tracing::info!(
                email = %mask_email(&command.email),
                code_type = %command.code_type,
                event = "code_rejected",
                reason = %e,
                "Verification code rejected"
            );
            e
        })?;

        match username {
            Some(name) => {
                if self
                    .user_repository
                    .exists_by_email(&command.email)
                    .await?
                {
                    return Err(AuthError::AccountAlreadyExists.into());
                }

                claim(self.code_repository.as_ref(), &stored).await?;

                // The code is gone from here on; a failed insert cannot restore it
                let user = self
                    .user_repository
                    .create(AdminUser::new(name, command.email.clone()))
                    .await?;

                tracing::info!(
                    email = %mask_email(&user.email),
                    user_id = %user.id,
                    event = "admin_signed_up",
                    "Created admin account from signup code"
                );

                Ok(VerificationOutcome::SignedUp { user_id: user.id })
            }
            None => {
                claim(self.code_repository.as_ref(), &stored).await?;

                tracing::info!(
                    email = %mask_email(&command.email),
                    event = "signin_code_verified",
                    "Signin code verified"
                );

                Ok(VerificationOutcome::SignedIn)
            }
        }
    }
}
