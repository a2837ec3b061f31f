//! Authentication route handlers
//!
//! - `POST /api/auth/verify-code` - check a signup or signin code
//! - `POST /api/auth/signin` - exchange a signin code for a session token
//! - `GET /api/auth/session` - describe the current session

pub mod session;
pub mod signin;
pub mod verify_code;
