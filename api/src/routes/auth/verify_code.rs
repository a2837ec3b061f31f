use actix_web::{web, HttpResponse};
use validator::Validate;

use cs2dle_core::errors::{DomainError, DomainResult};
use cs2dle_core::repositories::{AdminUserRepository, VerificationCodeRepository};
use cs2dle_core::services::{VerificationOutcome, VerifyCodeCommand};

use crate::dto::auth::{MessageResponse, SignUpResponse, VerifyCodeRequest};
use crate::handlers::error::{handle_domain_error, validation_details, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/auth/verify-code
///
/// # Request Body
///
/// ```json
/// {
///     "email": "admin@cs2dle.com",
///     "code": "123456",
///     "type": "signup" | "signin",
///     "username": "admin"
/// }
/// ```
///
/// # Response
///
/// - 201 Created: `{"message": "...", "userId": "..."}` for signup
/// - 200 OK: `{"message": "Code verified successfully"}` for signin
///
/// ## Errors
/// - 400 Bad Request: schema violation, invalid or expired code, missing username
/// - 409 Conflict: an account already exists for the email
/// - 500 Internal Server Error: storage failure
pub async fn verify_code<C, U>(
    state: web::Data<AppState<C, U>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    C: VerificationCodeRepository + 'static,
    U: AdminUserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        let mut details = validation_details(&errors);
        // The wire name of `code_type` is `type`
        if let Some(messages) = details.remove("code_type") {
            details.insert("type".to_string(), messages);
        }
        return validation_error_response(details);
    }

    let request = request.into_inner();
    match run(&state, request).await {
        Ok(VerificationOutcome::SignedUp { user_id }) => {
            HttpResponse::Created().json(SignUpResponse {
                message: "Account created successfully".to_string(),
                user_id,
            })
        }
        Ok(VerificationOutcome::SignedIn) => HttpResponse::Ok().json(MessageResponse {
            message: "Code verified successfully".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

async fn run<C, U>(
    state: &AppState<C, U>,
    request: VerifyCodeRequest,
) -> DomainResult<VerificationOutcome>
where
    C: VerificationCodeRepository + 'static,
    U: AdminUserRepository + 'static,
{
    let code_type = request.parsed_type().ok_or_else(|| DomainError::Validation {
        message: "type must be either \"signup\" or \"signin\"".to_string(),
    })?;

    state
        .verification_service
        .verify_code(VerifyCodeCommand {
            email: request.email,
            code: request.code,
            code_type,
            username: request.username,
        })
        .await
}
