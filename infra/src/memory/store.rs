//! In-memory `KeyValueStore` with TTL support

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use mb_core::errors::DomainError;
use mb_core::repositories::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

/// Key-value store kept in a single mutex-guarded map
///
/// Expired entries are dropped lazily when touched. Every operation,
/// including `move_if`, runs under the one lock, which gives the same
/// atomicity as the Redis script.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining lifetime of a key, if it is live and has one
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|e| e.is_live(now))
            .and_then(|e| e.expires_at)
            .map(|at| at.saturating_duration_since(now))
    }

    fn live<'a>(entries: &'a mut HashMap<String, Entry>, key: &str) -> Option<&'a Entry> {
        let now = Instant::now();
        if entries.get(key).map_or(false, |e| !e.is_live(now)) {
            entries.remove(key);
        }
        entries.get(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut entries = self.entries.lock().await;
        Ok(Self::live(&mut entries, key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().await;
        if Self::live(&mut entries, key).is_some() {
            return Ok(false);
        }
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(true)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + Duration::from_secs(ttl_seconds)),
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().await;
        let existed = Self::live(&mut entries, key).is_some();
        entries.remove(key);
        Ok(existed)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().await;
        Ok(Self::live(&mut entries, key).is_some())
    }

    async fn move_if(
        &self,
        from: &str,
        expected: Option<&str>,
        to: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<Option<String>, DomainError> {
        let mut entries = self.entries.lock().await;

        let matches = match (Self::live(&mut entries, from), expected) {
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
                expires_at: Some(Instant::now() + Duration::from_secs(ttl_seconds)),
            },
        );
        Ok(previous)
    }
}
