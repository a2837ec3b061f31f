//! Route handlers and shared application state

pub mod auth;
pub mod health;

use std::sync::Arc;

use cs2dle_core::repositories::{AdminUserRepository, VerificationCodeRepository};
use cs2dle_core::services::{AuthService, TokenService, VerificationService};

/// Services shared by all handlers
pub struct AppState<C, U>
where
    C: VerificationCodeRepository + 'static,
    U: AdminUserRepository + 'static,
{
    pub verification_service: Arc<VerificationService<C, U>>,
    pub auth_service: Arc<AuthService<C, U>>,
    pub token_service: Arc<TokenService>,
}

impl<C, U> AppState<C, U>
where
    C: VerificationCodeRepository + 'static,
    U: AdminUserRepository + 'static,
{
    /// Wire the services over a pair of repositories
    pub fn new(
        code_repository: Arc<C>,
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
    ) -> Self {
        let verification_service = Arc::new(VerificationService::new(
            code_repository.clone(),
            user_repository.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(
            code_repository,
            user_repository,
            token_service.clone(),
        ));

        Self {
            verification_service,
            auth_service,
            token_service,
        }
    }
}
