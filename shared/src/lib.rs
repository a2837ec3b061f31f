//! Shared utilities and common types for the CS2DLE admin backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The JSON error envelope returned by every endpoint
//! - Utility functions (log masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CleanupConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use types::{error_codes, ErrorResponse};
pub use utils::mask_email;
