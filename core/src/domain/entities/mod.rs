//! Domain entities representing core business objects.

pub mod admin_user;
pub mod session;
pub mod verification_code;


// Re-export commonly used types
pub use admin_user::{AdminRole, AdminStatus, AdminUser};
pub use session::{SessionClaims, SessionIdentity, SessionToken, SESSION_EXPIRY_HOURS};
pub use verification_code::{CodeType, VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
