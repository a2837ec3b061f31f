use actix_web::{web, HttpResponse};
use validator::Validate;

use cs2dle_core::repositories::{AdminUserRepository, VerificationCodeRepository};

use crate::dto::auth::{SignInRequest, SignInResponse};
use crate::handlers::error::{handle_signin_error, validation_details, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/auth/signin
///
/// Exchanges a signin code for a session token valid for 24 hours.
///
/// ## Errors
/// - 400 Bad Request: schema violation
/// - 401 Unauthorized: invalid or expired code, unknown or inactive account
/// - 500 Internal Server Error: storage or signing failure
pub async fn signin<C, U>(
    state: web::Data<AppState<C, U>>,
    request: web::Json<SignInRequest>,
) -> HttpResponse
where
    C: VerificationCodeRepository + 'static,
    U: AdminUserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(validation_details(&errors));
    }

    match state.auth_service.sign_in(&request.email, &request.code).await {
        Ok(session) => HttpResponse::Ok().json(SignInResponse {
            token: session.token,
            expires_at: session.expires_at,
            user: session.identity.into(),
        }),
        Err(error) => handle_signin_error(error),
    }
}
