//! Code cleanup service for periodic maintenance of the code store

use chrono::{Duration, Utc};
use cs2dle_shared::CleanupConfig;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::VerificationCodeRepository;

/// Service for deleting verification codes that expired long ago
pub struct CodeCleanupService<C: VerificationCodeRepository + 'static> {
    repository: Arc<C>,
    config: CleanupConfig,
}

impl<C: VerificationCodeRepository> CodeCleanupService<C> {
    /// Create a new code cleanup service
    pub fn new(repository: Arc<C>, config: CleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// Deletes codes whose expiry is older than the grace period. Unexpired
    /// codes and recently expired ones are never touched.
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        let cutoff = Utc::now() - Duration::minutes(self.config.grace_period_minutes.max(0));
        let mut result = CleanupResult::default();

        match self.repository.delete_expired_before(cutoff).await {
            Ok(count) => {
                result.expired_codes_deleted = count;
                info!(
                    deleted = count,
                    cutoff = %cutoff,
                    event = "code_cleanup",
                    "Deleted expired verification codes"
                );
            }
            Err(e) => {
                error!("Failed to cleanup expired codes: {}", e);
                result.errors.push(format!("Code cleanup error: {}", e));
            }
        }

        Ok(result)
    }

    /// Start the cleanup service as a background task
    ///
    /// This spawns a tokio task that runs cleanup at regular intervals
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Code cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        tokio::spawn(async move {
            info!(
                "Code cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_cleanup().await {
                    Ok(result) => {
                        if !result.is_success() {
                            warn!("Cleanup completed with errors: {:?}", result.errors);
                        }
                    }
                    Err(e) => {
                        error!("Code cleanup cycle failed: {}", e);
                    }
                }
            }
        });
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default)]
pub struct CleanupResult {
    /// Number of expired codes deleted
    pub expired_codes_deleted: u64,
    /// Any errors encountered during cleanup
    pub errors: Vec<String>,
}

impl CleanupResult {
    /// Check if the cleanup was successful (no errors)
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
