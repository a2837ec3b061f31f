//! Background purge of expired verification codes
//!
//! Verification never deletes expired codes, so they accumulate until this
//! service removes them once they are past a grace period.

mod service;


pub use service::{CleanupResult, CodeCleanupService};
