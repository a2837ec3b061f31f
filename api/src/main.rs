use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use cs2dle_api::{create_app, telemetry, AppState};
use cs2dle_core::services::{CodeCleanupService, TokenService, TokenServiceConfig};
use cs2dle_infra::database::{
    DatabasePool, MySqlAdminUserRepository, MySqlVerificationCodeRepository,
};
use cs2dle_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "Starting CS2DLE admin API"
    );

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to database")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let code_repository = Arc::new(MySqlVerificationCodeRepository::new(
        database.get_pool().clone(),
    ));
    let user_repository = Arc::new(MySqlAdminUserRepository::new(database.get_pool().clone()));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));

    if config.cleanup.enabled {
        let cleanup = Arc::new(CodeCleanupService::new(
            code_repository.clone(),
            config.cleanup.clone(),
        ));
        cleanup.start_background_task();
    }

    let state = web::Data::new(AppState::new(
        code_repository,
        user_repository,
        token_service,
    ));
    let database = web::Data::new(database);

    let app_config = config.clone();
    let app_database = database.clone();
    let mut server = HttpServer::new(move || {
        create_app(state.clone(), &app_config, Some(app_database.clone()))
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?
        .run()
        .await?;

    database.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
