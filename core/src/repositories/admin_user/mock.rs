//! In-memory implementation of AdminUserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::admin_user::AdminUser;
use crate::errors::{AuthError, DomainError};

use super::trait_::AdminUserRepository;

/// Mock admin user repository
#[derive(Clone)]
pub struct MockAdminUserRepository {
    users: Arc<RwLock<HashMap<Uuid, AdminUser>>>,
}

impl MockAdminUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MockAdminUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminUserRepository for MockAdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: AdminUser) -> Result<AdminUser, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::AccountAlreadyExists.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
