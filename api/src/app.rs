//! Application factory
//!
//! Builds the Actix-web `App` from already wired services so that `main`
//! and the integration tests share one routing table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use cs2dle_core::repositories::{AdminUserRepository, VerificationCodeRepository};
use cs2dle_infra::database::DatabasePool;
use cs2dle_shared::{error_codes, AppConfig, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::SessionAuth, cors::create_cors};
use crate::routes::auth::{session::session, signin::signin, verify_code::verify_code};
use crate::routes::health::{health_check, readiness};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
///
/// `database` is only used by the readiness probe; without it
/// `/health/ready` reports 503.
pub fn create_app<C, U>(
    state: web::Data<AppState<C, U>>,
    config: &AppConfig,
    database: Option<web::Data<DatabasePool>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    C: VerificationCodeRepository + 'static,
    U: AdminUserRepository + 'static,
{
    let session_auth = SessionAuth::new(state.token_service.clone());
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    let mut app = App::new().app_data(state).app_data(json_config);
    if let Some(database) = database {
        app = app.app_data(database);
    }

    app
        // Middleware order: the last `wrap` runs first
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/health/ready", web::get().to(readiness))
        .service(
            web::scope("/api/auth")
                .route("/verify-code", web::post().to(verify_code::<C, U>))
                .route("/signin", web::post().to(signin::<C, U>))
                .service(
                    web::resource("/session")
                        .wrap(session_auth)
                        .route(web::get().to(session)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
