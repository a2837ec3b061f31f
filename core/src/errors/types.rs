//! Error types for the admin authentication flows
//!
//! Messages here are the human-readable text returned to the dashboard;
//! the presentation layer pairs each variant with a stable error code.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No stored code matches the submitted (email, code, type) triple,
    /// or the matching code was consumed by a concurrent request.
    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Username is required for signup")]
    MissingUsername,

    #[error("No admin account exists for this email")]
    AccountNotFound,

    #[error("Admin account is not active")]
    AccountInactive,

    #[error("An admin account with this email already exists")]
    AccountAlreadyExists,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing session token")]
    Missing,

    #[error("Invalid session token")]
    Invalid,

    #[error("Session has expired")]
    Expired,

    #[error("Failed to generate session token: {0}")]
    GenerationFailed(String),
}
