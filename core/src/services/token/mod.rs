//! Token service module for session JWT management
//!
//! Sessions are stateless: a signed token carrying the admin identity is
//! the only session state. Nothing is persisted server-side.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
