pub mod auth;

pub use auth::*;
pub use cs2dle_shared::ErrorResponse;
