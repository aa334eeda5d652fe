//! Key-value store trait used for token ledger state.
//!
//! The ledger never touches a concrete client. Everything it needs is the
//! small set of single-key primitives below plus one scripted
//! compare-and-move, which is what makes rotation race free.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Minimal key-value store with per-key TTL
///
/// Every method maps to a single store round trip. Implementations report
/// connectivity problems and timeouts as `DomainError::StoreUnavailable`
/// and never retry on their own.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key is absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a value without expiry
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Write a value without expiry only if the key is absent
    ///
    /// Returns whether this call created the key.
    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, DomainError>;

    /// Write a value expiring after `ttl_seconds`
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Delete a key, returning whether it existed
    async fn del(&self, key: &str) -> Result<bool, DomainError>;

    /// Check whether a key is present
    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    /// Atomically move `from` to `to`
    ///
    /// When `from` exists and (if `expected` is given) holds exactly
    /// `expected`, the key is deleted and `to` is written with `value` and
    /// `ttl_seconds`, all as one indivisible step. Returns the previous value
    /// of `from`, or `None` when nothing was moved.
    async fn move_if(
        &self,
        from: &str,
        expected: Option<&str>,
        to: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<Option<String>, DomainError>;
}
