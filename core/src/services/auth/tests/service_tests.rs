//! Unit tests for authentication service

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::admin_user::{AdminStatus, AdminUser};
use crate::domain::entities::session::SessionIdentity;
use crate::domain::entities::verification_code::{CodeType, VerificationCode};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{
    AdminUserRepository, MockAdminUserRepository, MockVerificationCodeRepository,
    VerificationCodeRepository,
};
use crate::services::auth::AuthService;
use crate::services::test_support::LockstepCodeRepository;
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    codes: Arc<MockVerificationCodeRepository>,
    users: Arc<MockAdminUserRepository>,
    service: AuthService<MockVerificationCodeRepository, MockAdminUserRepository>,
}

fn fixture() -> Fixture {
    let codes = Arc::new(MockVerificationCodeRepository::new());
    let users = Arc::new(MockAdminUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let service = AuthService::new(codes.clone(), users.clone(), tokens);
    Fixture {
        codes,
        users,
        service,
    }
}

async fn store(
    fx: &Fixture,
    email: &str,
    value: &str,
    code_type: CodeType,
    minutes: i64,
) -> VerificationCode {
    let expires_at = Utc::now() + Duration::minutes(minutes);
    let code = VerificationCode::with_code(email, value, code_type, expires_at);
    fx.codes.save(&code).await.unwrap();
    code
}

async fn admin(fx: &Fixture, email: &str, status: AdminStatus) -> AdminUser {
    let mut user = AdminUser::new("admin", email);
    user.status = status;
    fx.users.create(user).await.unwrap()
}

fn auth_error<T: std::fmt::Debug>(result: Result<T, DomainError>) -> AuthError {
    match result {
        Err(DomainError::Auth(e)) => e,
        other => panic!("expected auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_authorize_returns_identity_and_consumes_code() {
    let fx = fixture();
    let user = admin(&fx, "admin@cs2dle.com", AdminStatus::Active).await;
    let code = store(&fx, "admin@cs2dle.com", "123456", CodeType::Signin, 10).await;

    let identity = fx.service.authorize("admin@cs2dle.com", "123456").await.unwrap();
    assert_eq!(
        identity,
        SessionIdentity {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    );
    assert!(!fx.codes.contains(code.id).await);

    let again = fx.service.authorize("admin@cs2dle.com", "123456").await;
    assert_eq!(auth_error(again), AuthError::InvalidCode);
}

#[tokio::test]
async fn test_authorize_rejects_signup_code() {
    let fx = fixture();
    admin(&fx, "admin@cs2dle.com", AdminStatus::Active).await;
    store(&fx, "admin@cs2dle.com", "123456", CodeType::Signup, 10).await;

    let result = fx.service.authorize("admin@cs2dle.com", "123456").await;
    assert_eq!(auth_error(result), AuthError::InvalidCode);
}

#[tokio::test]
async fn test_authorize_expired_code() {
    let fx = fixture();
    admin(&fx, "admin@cs2dle.com", AdminStatus::Active).await;
    let code = store(&fx, "admin@cs2dle.com", "123456", CodeType::Signin, -1).await;

    let result = fx.service.authorize("admin@cs2dle.com", "123456").await;
    assert_eq!(auth_error(result), AuthError::CodeExpired);
    assert!(fx.codes.contains(code.id).await);
}

#[tokio::test]
async fn test_authorize_unknown_account_keeps_code() {
    let fx = fixture();
    let code = store(&fx, "ghost@cs2dle.com", "123456", CodeType::Signin, 10).await;

    let result = fx.service.authorize("ghost@cs2dle.com", "123456").await;
    assert_eq!(auth_error(result), AuthError::AccountNotFound);
    assert!(fx.codes.contains(code.id).await);
}

#[tokio::test]
async fn test_authorize_inactive_account_keeps_code() {
    let fx = fixture();
    admin(&fx, "off@cs2dle.com", AdminStatus::Inactive).await;
    admin(&fx, "banned@cs2dle.com", AdminStatus::Suspended).await;
    let off = store(&fx, "off@cs2dle.com", "123456", CodeType::Signin, 10).await;
    let banned = store(&fx, "banned@cs2dle.com", "654321", CodeType::Signin, 10).await;

    let result = fx.service.authorize("off@cs2dle.com", "123456").await;
    assert_eq!(auth_error(result), AuthError::AccountInactive);

    let result = fx.service.authorize("banned@cs2dle.com", "654321").await;
    assert_eq!(auth_error(result), AuthError::AccountInactive);

    assert!(fx.codes.contains(off.id).await);
    assert!(fx.codes.contains(banned.id).await);
}

#[tokio::test]
async fn test_sign_in_issues_verifiable_session() {
    let fx = fixture();
    let user = admin(&fx, "admin@cs2dle.com", AdminStatus::Active).await;
    store(&fx, "admin@cs2dle.com", "123456", CodeType::Signin, 10).await;

    let session = fx.service.sign_in("admin@cs2dle.com", "123456").await.unwrap();
    assert_eq!(session.identity.id, user.id);

    let claims = fx.service.token_service().verify(&session.token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.email, "admin@cs2dle.com");

    let expected = Utc::now() + Duration::hours(24);
    assert!((session.expires_at - expected).num_seconds().abs() <= 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_sign_in_single_session() {
    let codes = MockVerificationCodeRepository::new();
    let users = Arc::new(MockAdminUserRepository::new());
    users
        .create(AdminUser::new("admin", "admin@cs2dle.com"))
        .await
        .unwrap();
    let code = VerificationCode::with_code(
        "admin@cs2dle.com",
        "123456",
        CodeType::Signin,
        Utc::now() + Duration::minutes(10),
    );
    codes.save(&code).await.unwrap();

    let gated = Arc::new(LockstepCodeRepository::new(codes.clone(), 2));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let service = Arc::new(AuthService::new(gated, users, tokens));

    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.sign_in("admin@cs2dle.com", "123456").await })
        })
        .collect();

    let mut results = Vec::new();
    for task in tasks {
        results.push(task.await.unwrap());
    }

    let (won, lost): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.is_ok());
    assert_eq!(won.len(), 1);
    assert_eq!(lost.len(), 1);
    let failure = lost.into_iter().next().unwrap();
    assert_eq!(auth_error(failure), AuthError::InvalidCode);
    assert!(codes.is_empty().await);
}
