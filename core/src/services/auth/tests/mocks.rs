//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::DomainError;
use crate::services::auth::PasswordHasher;

/// Reversible "hasher" so tests stay fast and deterministic
#[derive(Default)]
pub struct PlainHasher {
    verifications: AtomicUsize,
}

impl PlainHasher {
    /// Number of `verify` calls so far
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        Ok(hash.strip_prefix("plain:") == Some(password))
    }

    fn decoy_hash(&self) -> &str {
        "plain:\u{0}decoy"
    }
}
