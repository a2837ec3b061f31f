//! CORS middleware configuration for the admin dashboard.
//!
//! With no configured origins (development) any origin is accepted.
//! Otherwise only the listed dashboard origins may call the API.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use cs2dle_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.is_permissive() {
        tracing::info!("Configuring permissive CORS (any origin)");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            tracing::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}
