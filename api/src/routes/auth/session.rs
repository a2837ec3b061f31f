use actix_web::HttpResponse;

use crate::dto::auth::SessionResponse;
use crate::middleware::auth::SessionContext;

/// Handler for GET /api/auth/session
///
/// Requires a valid Bearer token; the session middleware rejects anything
/// else with 401 before this runs.
pub async fn session(context: SessionContext) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        user: context.identity.into(),
        expires_at: context.expires_at,
    })
}
