//! # Infrastructure Layer
//!
//! Concrete implementations of the core crate's seams:
//! - **Cache**: Redis client and the `KeyValueStore` implementation backing
//!   the refresh token ledger
//! - **Repositories**: user and post storage in Redis
//! - **Memory**: in-process stand-ins for local runs and tests
//! - **Security**: bcrypt password hashing

use mb_core::errors::DomainError;

/// Cache module - Redis client and operations
pub mod cache;

/// In-memory store and repositories
pub mod memory;

/// Repository implementations
pub mod repositories;

/// Password hashing
pub mod security;

pub use cache::RedisClient;
pub use memory::{InMemoryKeyValueStore, InMemoryPostRepository};
pub use repositories::{KeyValueUserRepository, RedisPostRepository};
pub use security::BcryptHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// A store command did not answer in time
    #[error("Store operation '{operation}' timed out after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },

    /// Stored data could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Cache(_) | InfrastructureError::Timeout { .. } => {
                DomainError::StoreUnavailable {
                    message: err.to_string(),
                }
            }
            InfrastructureError::Serialization(_) => DomainError::Internal {
                message: err.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Config { message },
        }
    }
}
