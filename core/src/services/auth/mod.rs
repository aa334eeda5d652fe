//! Authentication service module
//!
//! This module provides:
//! - User registration with unique username and email
//! - Credential check and token pair issuance
//! - Refresh token rotation and signout revocation

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::AuthService;
