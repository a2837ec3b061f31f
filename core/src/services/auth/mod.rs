//! Authentication service module
//!
//! Turns a signin code into a session: the code is checked against an
//! active admin account, consumed, and exchanged for a signed token.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
