//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use cs2dle_api::AppState;
use cs2dle_core::{
    AdminStatus, AdminUser, AdminUserRepository, CodeType, MockAdminUserRepository,
    MockVerificationCodeRepository, TokenService, TokenServiceConfig, VerificationCode,
    VerificationCodeRepository,
};

pub type TestState = AppState<MockVerificationCodeRepository, MockAdminUserRepository>;

pub struct Fixture {
    pub state: web::Data<TestState>,
    pub codes: Arc<MockVerificationCodeRepository>,
    pub users: Arc<MockAdminUserRepository>,
    pub tokens: Arc<TokenService>,
}

impl Fixture {
    pub fn new() -> Self {
        let codes = Arc::new(MockVerificationCodeRepository::new());
        let users = Arc::new(MockAdminUserRepository::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
        let state = web::Data::new(AppState::new(
            codes.clone(),
            users.clone(),
            tokens.clone(),
        ));

        Self {
            state,
            codes,
            users,
            tokens,
        }
    }

    /// Store a code that is valid for another ten minutes
    pub async fn issue_code(
        &self,
        email: &str,
        code: &str,
        code_type: CodeType,
    ) -> VerificationCode {
        let expires_at = Utc::now() + Duration::minutes(10);
        let code = VerificationCode::with_code(email, code, code_type, expires_at);
        self.codes.save(&code).await.unwrap();
        code
    }

    /// Store a code that expired a minute ago
    pub async fn issue_expired_code(&self, email: &str, code: &str, code_type: CodeType) {
        let expires_at = Utc::now() - Duration::minutes(1);
        let code = VerificationCode::with_code(email, code, code_type, expires_at);
        self.codes.save(&code).await.unwrap();
    }

    pub async fn create_admin(&self, name: &str, email: &str, status: AdminStatus) -> AdminUser {
        let mut user = AdminUser::new(name, email);
        user.set_status(status);
        self.users.create(user).await.unwrap()
    }
}
