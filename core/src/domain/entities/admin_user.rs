//! Admin user entity for dashboard operators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::session::SessionIdentity;

/// Account status; only `Active` accounts may sign in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminStatus {
    Active,
    Inactive,
    Suspended,
}

impl AdminStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminStatus::Active => "Active",
            AdminStatus::Inactive => "Inactive",
            AdminStatus::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AdminStatus::Active),
            "Inactive" => Ok(AdminStatus::Inactive),
            "Suspended" => Ok(AdminStatus::Suspended),
            other => Err(format!("unknown admin status: {}", other)),
        }
    }
}

/// Dashboard role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Moderator,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::Moderator => "moderator",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AdminRole::Admin),
            "moderator" => Ok(AdminRole::Moderator),
            other => Err(format!("unknown admin role: {}", other)),
        }
    }
}

/// Admin account entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Display name chosen at signup
    pub name: String,

    /// Email address, unique across accounts
    pub email: String,

    /// Account status
    pub status: AdminStatus,

    /// Dashboard role
    pub role: AdminRole,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl AdminUser {
    /// Creates a new active admin account
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            status: AdminStatus::Active,
            role: AdminRole::Admin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the account status
    pub fn set_status(&mut self, status: AdminStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Whether the account may authenticate
    pub fn is_active(&self) -> bool {
        self.status == AdminStatus::Active
    }

    /// The minimal claim carried by a session token
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}
