//! Mock implementation of KeyValueStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DomainError;

use super::trait_::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Option<u64>,
}

/// Mock key-value store for testing
///
/// TTLs are recorded but never enforced.
#[derive(Clone, Default)]
pub struct MockKeyValueStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockKeyValueStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// TTL recorded for a key, if the key exists and has one
    pub async fn ttl_of(&self, key: &str) -> Option<u64> {
        self.entries.lock().await.get(key).and_then(|e| e.ttl)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                message: "mock store offline".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MockKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check()?;
        Ok(self.entries.lock().await.get(key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.check()?;
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl: None,
            },
        );
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, DomainError> {
        self.check()?;
        let mut entries = self.entries.lock().await;
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl: None,
            },
        );
        Ok(true)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        self.check()?;
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl: Some(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.entries.lock().await.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.entries.lock().await.contains_key(key))
    }

    async fn move_if(
        &self,
        from: &str,
        expected: Option<&str>,
        to: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<Option<String>, DomainError> {
        self.check()?;
        let mut entries = self.entries.lock().await;

        let matches = match (entries.get(from), expected) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(current), Some(expected)) => current.value == expected,
        };
        if !matches {
            return Ok(None);
        }

        let previous = entries.remove(from).map(|e| e.value);
        entries.insert(
            to.to_string(),
            Entry {
                value: value.to_string(),
                ttl: Some(ttl_seconds),
            },
        );
        Ok(previous)
    }
}
