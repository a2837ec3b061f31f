use chrono::{DateTime, Utc};
use cs2dle_core::domain::entities::session::SessionIdentity;
use cs2dle_core::domain::entities::verification_code::CodeType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Email the code was sent to, matched exactly as submitted
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// 6-character verification code
    #[validate(length(equal = 6, message = "must be exactly 6 characters"))]
    pub code: String,

    /// "signup" or "signin"
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_code_type"))]
    pub code_type: String,

    /// Display name for the new account; required when `type` is "signup".
    /// A blank value is treated as missing rather than as a schema error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub username: Option<String>,
}

impl VerifyCodeRequest {
    /// Parsed code type; only meaningful after `validate()` succeeded
    pub fn parsed_type(&self) -> Option<CodeType> {
        self.code_type.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(equal = 6, message = "must be exactly 6 characters"))]
    pub code: String,
}

fn validate_code_type(value: &str) -> Result<(), ValidationError> {
    match value.parse::<CodeType>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = ValidationError::new("code_type");
            error.message = Some("must be either \"signup\" or \"signin\"".into());
            Err(error)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<SessionIdentity> for SessionUser {
    fn from(identity: SessionIdentity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}
