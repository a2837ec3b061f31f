//! HTTP tests for the /api/auth endpoints backed by in-memory repositories

mod common;

use actix_web::{http::header, http::StatusCode, test};
use serde_json::{json, Value};

use common::Fixture;
use cs2dle_api::create_app;
use cs2dle_core::{
    AdminStatus, AdminUserRepository, CodeType, SessionIdentity, TokenService, TokenServiceConfig,
};
use cs2dle_shared::AppConfig;

#[actix_web::test]
async fn test_signin_code_verifies_once() {
    let fixture = Fixture::new();
    fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Active).await;
    fixture.issue_code("ops@cs2dle.com", "123456", CodeType::Signin).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let body = json!({ "email": "ops@cs2dle.com", "code": "123456", "type": "signin" });

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Code verified successfully");

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "Invalid verification code");
    assert_eq!(json["code"], "invalid_verification_code");
}

#[actix_web::test]
async fn test_signup_creates_account() {
    let fixture = Fixture::new();
    fixture.issue_code("new@cs2dle.com", "654321", CodeType::Signup).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({
            "email": "new@cs2dle.com",
            "code": "654321",
            "type": "signup",
            "username": "newbie"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json: Value = test::read_body_json(resp).await;
    let user_id = json["userId"].as_str().unwrap().parse().unwrap();

    let user = fixture.users.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(user.name, "newbie");
    assert_eq!(user.email, "new@cs2dle.com");
    assert!(user.is_active());
    assert!(fixture.codes.is_empty().await);
}

#[actix_web::test]
async fn test_signup_for_existing_account_conflicts() {
    let fixture = Fixture::new();
    fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Active).await;
    fixture.issue_code("ops@cs2dle.com", "111111", CodeType::Signup).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({
            "email": "ops@cs2dle.com",
            "code": "111111",
            "type": "signup",
            "username": "again"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["code"], "account_already_exists");
    assert_eq!(fixture.users.count().await, 1);
}

#[actix_web::test]
async fn test_signup_without_username_is_rejected() {
    let fixture = Fixture::new();
    fixture.issue_code("new@cs2dle.com", "222222", CodeType::Signup).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    for username in [json!(null), json!("   ")] {
        let req = test::TestRequest::post()
            .uri("/api/auth/verify-code")
            .set_json(json!({
                "email": "new@cs2dle.com",
                "code": "222222",
                "type": "signup",
                "username": username
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "Username is required for signup");
    }

    // The code is still usable
    assert_eq!(fixture.codes.len().await, 1);
}

#[actix_web::test]
async fn test_expired_code_is_rejected() {
    let fixture = Fixture::new();
    fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Active).await;
    fixture.issue_expired_code("ops@cs2dle.com", "333333", CodeType::Signin).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "email": "ops@cs2dle.com", "code": "333333", "type": "signin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "Verification code has expired");
    assert_eq!(fixture.codes.len().await, 1);
}

#[actix_web::test]
async fn test_invalid_request_body_reports_fields() {
    let fixture = Fixture::new();
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "email": "not-an-email", "code": "12", "type": "Signin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["code"], "validation_error");
    let details = json["details"].as_object().unwrap();
    assert!(details.contains_key("email"));
    assert!(details.contains_key("code"));
    assert!(details.contains_key("type"));
}

#[actix_web::test]
async fn test_malformed_json_uses_error_envelope() {
    let fixture = Fixture::new();
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["code"], "validation_error");
    assert!(json["details"]["body"].is_array());
}

#[actix_web::test]
async fn test_signin_then_session() {
    let fixture = Fixture::new();
    let admin = fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Active).await;
    fixture.issue_code("ops@cs2dle.com", "444444", CodeType::Signin).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({ "email": "ops@cs2dle.com", "code": "444444" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["user"]["id"], admin.id.to_string());
    assert_eq!(json["user"]["name"], "ops");
    assert!(json["expiresAt"].is_string());
    let token = json["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["user"]["email"], "ops@cs2dle.com");
    assert_eq!(json["user"]["id"], admin.id.to_string());
}

#[actix_web::test]
async fn test_signin_with_bad_code_is_unauthorized() {
    let fixture = Fixture::new();
    fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Active).await;
    fixture.issue_code("ops@cs2dle.com", "555555", CodeType::Signin).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({ "email": "ops@cs2dle.com", "code": "000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "Invalid verification code");
}

#[actix_web::test]
async fn test_signin_for_inactive_account_keeps_code() {
    let fixture = Fixture::new();
    fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Suspended).await;
    fixture.issue_code("ops@cs2dle.com", "666666", CodeType::Signin).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({ "email": "ops@cs2dle.com", "code": "666666" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["code"], "account_inactive");
    assert_eq!(fixture.codes.len().await, 1);
}

#[actix_web::test]
async fn test_session_requires_valid_token() {
    let fixture = Fixture::new();
    let admin = fixture.create_admin("ops", "ops@cs2dle.com", AdminStatus::Active).await;
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    // Missing header
    let req = test::TestRequest::get().uri("/api/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Tampered signature
    let mut token = fixture.tokens.issue(admin.identity()).unwrap().token;
    token.push('x');
    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Signed with another secret
    let foreign = TokenService::new(TokenServiceConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..Default::default()
    });
    let token = foreign.issue(admin.identity()).unwrap().token;
    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_session_token() {
    let fixture = Fixture::new();
    let app = test::init_service(create_app(
        fixture.state.clone(),
        &AppConfig::default(),
        None,
    ))
    .await;

    let stale = TokenService::new(TokenServiceConfig {
        session_expiry_hours: -1,
        ..Default::default()
    });
    let identity = SessionIdentity {
        id: uuid::Uuid::new_v4(),
        email: "ops@cs2dle.com".to_string(),
        name: "ops".to_string(),
    };
    let token = stale.issue(identity).unwrap().token;

    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["code"], "token_expired");
}
