//! Repository wrappers used by the service tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Barrier;
use uuid::Uuid;

use crate::domain::entities::verification_code::{CodeType, VerificationCode};
use crate::errors::DomainError;
use crate::repositories::{MockVerificationCodeRepository, VerificationCodeRepository};

/// Holds every `find_matching` caller at a barrier after the lookup
///
/// With a barrier sized to the number of concurrent requests, every request
/// sees the code before any of them can consume it.
pub(crate) struct LockstepCodeRepository {
    inner: MockVerificationCodeRepository,
    barrier: Arc<Barrier>,
}

impl LockstepCodeRepository {
    pub(crate) fn new(inner: MockVerificationCodeRepository, parties: usize) -> Self {
        Self {
            inner,
            barrier: Arc::new(Barrier::new(parties)),
        }
    }
}

#[async_trait]
impl VerificationCodeRepository for LockstepCodeRepository {
    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        code_type: CodeType,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let found = self.inner.find_matching(email, code, code_type).await?;
        self.barrier.wait().await;
        Ok(found)
    }

    async fn save(&self, code: &VerificationCode) -> Result<(), DomainError> {
        self.inner.save(code).await
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        self.inner.consume(id).await
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.inner.delete_expired_before(cutoff).await
    }
}
