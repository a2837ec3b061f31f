//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token signing configuration
//! - `cleanup` - Expired verification code purge schedule
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Values are read from environment variables first, then overlaid with an
//! optional `config.<environment>.toml` file.

pub mod auth;
pub mod cleanup;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, DEFAULT_JWT_SECRET};
pub use cleanup::CleanupConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while assembling the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Expired code cleanup configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
            cleanup: CleanupConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables only
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging,
            cleanup: CleanupConfig::from_env(),
        }
    }

    /// Load the layered configuration and validate it
    ///
    /// Environment variables provide the base layer; an optional
    /// `config.<environment>.toml` in the working directory overrides it.
    pub fn load() -> Result<Self, ConfigError> {
        let base = Self::from_env();
        let file_name = base.environment.config_file();

        let layered = config::Config::builder()
            .add_source(config::Config::try_from(&base)?)
            .add_source(config::File::new(file_name, config::FileFormat::Toml).required(false))
            .build()?;

        let config: AppConfig = layered.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that must never reach production
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Invalid(
                "JWT_SECRET must be set in production".to_string(),
            ));
        }
        if self.auth.jwt.session_expiry_hours <= 0 {
            return Err(ConfigError::Invalid(
                "session_expiry_hours must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
