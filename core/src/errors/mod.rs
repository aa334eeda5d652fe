//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Startup-fatal misconfiguration (e.g. no signing secret)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The key-value store could not be reached or timed out
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a validation failure carrying a client-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Stable error code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Config { .. } => "CONFIG_ERROR",
            DomainError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(err) => err.code(),
            DomainError::Token(err) => err.code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
