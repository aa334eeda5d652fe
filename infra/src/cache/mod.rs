//! Cache module for Redis access
//!
//! Provides the Redis client and its `KeyValueStore` implementation used by
//! the refresh token ledger and the user repository.

pub mod redis_client;
mod store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;

// Re-export commonly used types
pub use mb_shared::config::CacheConfig;
