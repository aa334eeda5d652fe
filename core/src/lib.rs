//! # Mini Board Core
//!
//! Core business logic and domain layer for the Mini Board backend.
//! This crate contains domain entities, the token service and refresh
//! ledger, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Post, SignedToken, TokenKind, TokenPair, User};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{KeyValueStore, PostRepository, UserRepository};
pub use services::{
    AuthService, PasswordHasher, PostService, RefreshLedger, TokenService, TokenServiceConfig,
};
