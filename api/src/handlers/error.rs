//! Mapping of domain errors onto HTTP responses
//!
//! Every `DomainError` variant is matched exhaustively here. Database and
//! internal failures are logged and replaced with a generic message.

use std::collections::HashMap;

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use cs2dle_core::errors::{AuthError, DomainError, TokenError};
use cs2dle_shared::{error_codes, ErrorResponse};
use serde_json::Value;
use validator::ValidationErrors;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Status, code and client-facing message for a domain error
fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::Conflict { message } => {
            (StatusCode::CONFLICT, error_codes::CONFLICT, message.clone())
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            INTERNAL_MESSAGE.to_string(),
        ),
        DomainError::Auth(auth_error) => {
            let (status, code) = match auth_error {
                AuthError::InvalidCode => {
                    (StatusCode::BAD_REQUEST, error_codes::INVALID_VERIFICATION_CODE)
                }
                AuthError::CodeExpired => {
                    (StatusCode::BAD_REQUEST, error_codes::VERIFICATION_CODE_EXPIRED)
                }
                AuthError::MissingUsername => {
                    (StatusCode::BAD_REQUEST, error_codes::MISSING_USERNAME)
                }
                AuthError::AccountNotFound => {
                    (StatusCode::UNAUTHORIZED, error_codes::ACCOUNT_NOT_FOUND)
                }
                AuthError::AccountInactive => {
                    (StatusCode::UNAUTHORIZED, error_codes::ACCOUNT_INACTIVE)
                }
                AuthError::AccountAlreadyExists => {
                    (StatusCode::CONFLICT, error_codes::ACCOUNT_ALREADY_EXISTS)
                }
            };
            (status, code, auth_error.to_string())
        }
        DomainError::Token(token_error) => match token_error {
            TokenError::Missing | TokenError::Invalid => (
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHORIZED,
                token_error.to_string(),
            ),
            TokenError::Expired => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_EXPIRED,
                token_error.to_string(),
            ),
            TokenError::GenerationFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                INTERNAL_MESSAGE.to_string(),
            ),
        },
    }
}

fn respond(status: StatusCode, code: &str, message: String, error: &DomainError) -> HttpResponse {
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed with internal error");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code, message) = classify(&error);
    respond(status, code, message, &error)
}

/// Same as [`handle_domain_error`], except that code failures are reported
/// as 401 since the caller is trying to authenticate.
pub fn handle_signin_error(error: DomainError) -> HttpResponse {
    let (status, code, message) = classify(&error);
    let status = match &error {
        DomainError::Auth(AuthError::InvalidCode | AuthError::CodeExpired) => {
            StatusCode::UNAUTHORIZED
        }
        _ => status,
    };
    respond(status, code, message, &error)
}

/// Per-field messages from validator output
pub fn validation_details(errors: &ValidationErrors) -> HashMap<String, Value> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), Value::from(messages))
        })
        .collect()
}

/// 400 response for a request body that failed validation
pub fn validation_error_response(details: HashMap<String, Value>) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .with_details(details),
    )
}

/// JSON extractor error handler producing the standard envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };

    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
        .with_detail("body", Value::from(vec![err.to_string()]));
    let response = HttpResponse::build(status).json(body);

    InternalError::from_response(err, response).into()
}

/// 401 response for a rejected session token
pub fn unauthorized(error: &TokenError) -> HttpResponse {
    let code = match error {
        TokenError::Expired => error_codes::TOKEN_EXPIRED,
        _ => error_codes::UNAUTHORIZED,
    };
    HttpResponse::Unauthorized().json(ErrorResponse::new(code, error.to_string()))
}
