//! Business services containing domain logic and use cases.

pub mod auth;
pub mod cleanup;
pub mod token;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use auth::AuthService;
pub use cleanup::{CleanupResult, CodeCleanupService};
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{VerificationOutcome, VerificationService, VerifyCodeCommand};
