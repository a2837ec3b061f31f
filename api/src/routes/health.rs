//! Liveness and readiness probes

use actix_web::{web, HttpResponse};
use cs2dle_infra::database::DatabasePool;
use cs2dle_shared::{error_codes, ErrorResponse};

/// Liveness: the process is up and serving
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "cs2dle-admin-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Readiness: the database answers a trivial query
pub async fn readiness(database: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let Some(database) = database else {
        return not_ready("Database is not configured");
    };

    match database.health_check().await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "status": "ready" })),
        Ok(false) => not_ready("Database health check failed"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            not_ready("Database is unreachable")
        }
    }
}

fn not_ready(message: &str) -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .json(ErrorResponse::new(error_codes::SERVICE_UNAVAILABLE, message))
}
