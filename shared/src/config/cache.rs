//! Cache configuration module

use serde::{Deserialize, Serialize};
use std::env;

use super::parse_or;

/// Redis connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Response timeout in seconds, applied to every store command
    pub response_timeout: u64,

    /// Number of connection attempts at startup
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,

    /// Optional prefix applied to every key
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            response_timeout: 5,
            connect_retries: default_connect_retries(),
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_URL` wins over `REDIS_HOST`/`REDIS_PORT`.
    pub fn from_env() -> Self {
        let url = env::var("REDIS_URL").unwrap_or_else(|_| {
            let host = env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port: u16 = parse_or(env::var("REDIS_PORT").ok(), 6379);
            format!("redis://{}:{}", host, port)
        });

        Self {
            url,
            connection_timeout: parse_or(env::var("REDIS_CONNECTION_TIMEOUT").ok(), 5),
            response_timeout: parse_or(env::var("REDIS_RESPONSE_TIMEOUT").ok(), 5),
            key_prefix: env::var("REDIS_KEY_PREFIX").ok().filter(|p| !p.is_empty()),
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_connect_retries() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.response_timeout, 5);
        assert_eq!(config.connect_retries, 3);
    }

    #[test]
    fn test_cache_config_with_prefix() {
        let config = CacheConfig::new("redis://cache:6379").with_prefix("board");
        assert_eq!(config.make_key("rt:active:abc"), "board:rt:active:abc");
    }

    #[test]
    fn test_cache_key_without_prefix() {
        let config = CacheConfig::default();
        assert_eq!(config.make_key("user:123"), "user:123");
    }
}
