//! Shared configuration and common types for the Mini Board server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - API response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, CookieConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use types::{ErrorResponse, HealthResponse, MessageResponse};
