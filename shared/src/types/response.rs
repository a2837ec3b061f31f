//! API error envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Machine-readable error codes carried in [`ErrorResponse::code`]
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const INVALID_VERIFICATION_CODE: &str = "invalid_verification_code";
    pub const VERIFICATION_CODE_EXPIRED: &str = "verification_code_expired";
    pub const MISSING_USERNAME: &str = "missing_username";
    pub const ACCOUNT_NOT_FOUND: &str = "account_not_found";
    pub const ACCOUNT_INACTIVE: &str = "account_inactive";
    pub const ACCOUNT_ALREADY_EXISTS: &str = "account_already_exists";
    pub const CONFLICT: &str = "conflict";
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const TOKEN_EXPIRED: &str = "token_expired";
    pub const NOT_FOUND: &str = "not_found";
    pub const SERVICE_UNAVAILABLE: &str = "service_unavailable";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Error body returned by every failing endpoint
///
/// `error` is the human-readable message; `code` is stable and meant for
/// programmatic handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Error code for programmatic handling
    pub code: String,

    /// Per-field or contextual details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Replace the details map
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a single detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}
