//! # CS2DLE Core
//!
//! Core business logic and domain layer for the CS2DLE admin backend.
//! This crate contains domain entities, the verification and session
//! services, repository interfaces, and the error taxonomy the API layer
//! maps onto HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{
    AdminUserRepository, MockAdminUserRepository, MockVerificationCodeRepository,
    VerificationCodeRepository,
};
pub use services::*;
