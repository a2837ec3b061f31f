//! Type definitions shared by the API surface
//!
//! - `response` - the JSON error envelope and machine-readable error codes

pub mod response;

pub use response::{error_codes, ErrorResponse};
