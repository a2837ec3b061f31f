//! MySQL repository implementations

mod admin_user_repository_impl;
mod verification_code_repository_impl;

pub use admin_user_repository_impl::MySqlAdminUserRepository;
pub use verification_code_repository_impl::MySqlVerificationCodeRepository;

use cs2dle_core::errors::DomainError;

/// Map a SQLx failure onto the domain error type
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "{}", context);
    DomainError::database(format!("{}: {}", context, err))
}
