pub mod admin_user;
pub mod verification_code;

pub use admin_user::{AdminUserRepository, MockAdminUserRepository};
pub use verification_code::{MockVerificationCodeRepository, VerificationCodeRepository};
