//! Types for verification service requests and results

use uuid::Uuid;

use crate::domain::entities::verification_code::CodeType;

/// Input to `VerificationService::verify_code`
#[derive(Debug, Clone)]
pub struct VerifyCodeCommand {
    /// Email the code was sent to
    pub email: String,
    /// The submitted code
    pub code: String,
    /// Which flow the code is for
    pub code_type: CodeType,
    /// Display name for the new account, required for signup
    pub username: Option<String>,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// A new admin account was created
    SignedUp { user_id: Uuid },
    /// The signin code was valid and has been consumed
    SignedIn,
}
