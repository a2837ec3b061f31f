//! Admin user repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::admin_user::AdminUser;
use crate::errors::DomainError;

/// Repository trait for admin account persistence
///
/// Email is unique across accounts. Implementations must enforce this at
/// the storage level so that concurrent signups cannot create duplicates.
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Find an account by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError>;

    /// Find an account by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, DomainError>;

    /// Check whether an account exists for `email`
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(AdminUser)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::AccountAlreadyExists))` - Email taken
    async fn create(&self, user: AdminUser) -> Result<AdminUser, DomainError>;
}
