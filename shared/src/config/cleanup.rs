//! Expired verification code cleanup configuration

use serde::{Deserialize, Serialize};

/// Schedule for purging expired verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Whether the background purge task runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// How often to run cleanup (in seconds)
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,

    /// How long an expired code is kept before deletion (in minutes)
    #[serde(default = "default_grace_period_minutes")]
    pub grace_period_minutes: i64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_seconds: default_interval_seconds(),
            grace_period_minutes: default_grace_period_minutes(),
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("CODE_CLEANUP_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            interval_seconds: std::env::var("CODE_CLEANUP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_seconds),
            grace_period_minutes: std::env::var("CODE_CLEANUP_GRACE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.grace_period_minutes),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_interval_seconds() -> u64 {
    3600 // hourly
}

fn default_grace_period_minutes() -> i64 {
    60
}
