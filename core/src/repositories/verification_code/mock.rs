//! In-memory implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::{CodeType, VerificationCode};
use crate::errors::DomainError;

use super::trait_::VerificationCodeRepository;

/// Mock verification code repository
#[derive(Clone)]
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored codes
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the repository holds no codes
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }

    /// Whether a code with `id` is still stored
    pub async fn contains(&self, id: Uuid) -> bool {
        self.codes.read().await.contains_key(&id)
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        code_type: CodeType,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .find(|c| c.matches(email, code, code_type))
            .cloned())
    }

    async fn save(&self, code: &VerificationCode) -> Result<(), DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.id, code.clone());
        Ok(())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        Ok(codes.remove(&id).is_some())
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|_, c| c.expires_at >= cutoff);
        Ok((before - codes.len()) as u64)
    }
}
