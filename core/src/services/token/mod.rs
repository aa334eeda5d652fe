//! Token service module for JWT management
//!
//! This module handles:
//! - HS256 signing of access and refresh tokens
//! - Signature and expiry verification with clock-skew tolerance

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
