//! Verification service module for email code checks
//!
//! This module provides:
//! - Code lookup by exact (email, code, type) triple
//! - Expiry checks that leave expired codes in place
//! - Single-use consumption backed by the repository's atomic delete
//! - Admin account creation on successful signup verification

mod lookup;
mod service;
mod types;


pub(crate) use lookup::{claim, find_unexpired};
pub use service::VerificationService;
pub use types::{VerificationOutcome, VerifyCodeCommand};
