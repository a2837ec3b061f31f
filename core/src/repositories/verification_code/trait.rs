//! Verification code repository trait.
//!
//! Codes are written by the sending side of the system and read here. The
//! authentication flows only ever look codes up by their exact
//! (email, code, type) triple and delete them once they have been used.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_code::{CodeType, VerificationCode};
use crate::errors::DomainError;

/// Repository trait for verification code persistence
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Find a code matching the exact triple
    ///
    /// No normalization is applied: email case and whitespace must match the
    /// stored record byte for byte.
    ///
    /// # Returns
    /// * `Ok(Some(VerificationCode))` - Matching code found (may be expired)
    /// * `Ok(None)` - No match
    /// * `Err(DomainError)` - Storage error
    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        code_type: CodeType,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Store a code
    async fn save(&self, code: &VerificationCode) -> Result<(), DomainError>;

    /// Atomically delete the code with `id`
    ///
    /// Returns `true` only for the caller whose delete removed the record.
    /// When two requests race on the same code exactly one sees `true`.
    async fn consume(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every code whose expiry is before `cutoff`
    ///
    /// Returns the number of codes removed.
    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
