//! Shared lookup and consumption steps for code-based flows

use chrono::{DateTime, Utc};

use crate::domain::entities::verification_code::{CodeType, VerificationCode};
use crate::errors::{AuthError, DomainError};
use crate::repositories::VerificationCodeRepository;

/// Find the code matching the exact triple and reject it if expired
///
/// An expired code is returned as `CodeExpired` and left in storage.
pub(crate) async fn find_unexpired<C>(
    repository: &C,
    email: &str,
    code: &str,
    code_type: CodeType,
    now: DateTime<Utc>,
) -> Result<VerificationCode, DomainError>
where
    C: VerificationCodeRepository + ?Sized,
{
    let stored = repository
        .find_matching(email, code, code_type)
        .await?
        .ok_or(AuthError::InvalidCode)?;

    if stored.is_expired_at(now) {
        return Err(AuthError::CodeExpired.into());
    }

    Ok(stored)
}

/// Consume a code, failing with `InvalidCode` if another request got there first
pub(crate) async fn claim<C>(repository: &C, code: &VerificationCode) -> Result<(), DomainError>
where
    C: VerificationCodeRepository + ?Sized,
{
    if repository.consume(code.id).await? {
        Ok(())
    } else {
        tracing::warn!(
            code_id = %code.id,
            event = "code_consume_lost",
            "Verification code was consumed by a concurrent request"
        );
        Err(AuthError::InvalidCode.into())
    }
}
