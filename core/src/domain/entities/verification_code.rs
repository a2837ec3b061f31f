//! Verification code entity for email-based signup and signin.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for issued codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Which flow a verification code was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    /// Code proves ownership of an email for a new admin account
    Signup,
    /// Code authenticates an existing admin account
    Signin,
}

impl CodeType {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeType::Signup => "signup",
            CodeType::Signin => "signin",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeType {
    type Err = String;

    /// Exact match only; `"Signin"` is not a valid code type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(CodeType::Signup),
            "signin" => Ok(CodeType::Signin),
            other => Err(format!("unknown verification code type: {}", other)),
        }
    }
}

/// A one-time code emailed to an admin
///
/// Codes are single-use and time-bounded. They are deleted when consumed and
/// left in place when a check fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the verification code
    pub id: Uuid,

    /// Email address the code was sent to, stored exactly as issued
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Flow the code belongs to
    pub code_type: CodeType,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Issue a new code with a random 6-digit value and the default lifetime
    pub fn issue(email: impl Into<String>, code_type: CodeType) -> Self {
        Self::issue_with_expiration(email, code_type, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Issue a new code with a custom lifetime in minutes
    pub fn issue_with_expiration(
        email: impl Into<String>,
        code_type: CodeType,
        expiration_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            code: Self::generate_code(),
            code_type,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Build a code with a known value and expiry
    pub fn with_code(
        email: impl Into<String>,
        code: impl Into<String>,
        code_type: CodeType,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            code: code.into(),
            code_type,
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// Generates a random 6-digit code, zero padded
    pub(crate) fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Whether the code had expired at `now`
    ///
    /// Plain timestamp comparison; a code is still valid at the exact
    /// instant of `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the code has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Exact-triple match, no normalization or case folding
    pub fn matches(&self, email: &str, code: &str, code_type: CodeType) -> bool {
        self.email == email && self.code == code && self.code_type == code_type
    }

    /// Time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
