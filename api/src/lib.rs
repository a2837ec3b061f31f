//! # CS2DLE Admin API
//!
//! HTTP surface for admin authentication: code verification for signup
//! and signin, session issuance, and session introspection.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
