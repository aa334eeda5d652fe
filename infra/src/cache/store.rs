//! `KeyValueStore` backed by Redis

use async_trait::async_trait;

use mb_core::errors::DomainError;
use mb_core::repositories::KeyValueStore;

use super::redis_client::RedisClient;

#[async_trait]
impl KeyValueStore for RedisClient {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(RedisClient::get(self, key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        Ok(RedisClient::set(self, key, value).await?)
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, DomainError> {
        Ok(RedisClient::set_nx(self, key, value).await?)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        Ok(self.set_with_expiry(key, value, ttl_seconds).await?)
    }

    async fn del(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.delete(key).await?)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(RedisClient::exists(self, key).await?)
    }

    async fn move_if(
        &self,
        from: &str,
        expected: Option<&str>,
        to: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<Option<String>, DomainError> {
        Ok(RedisClient::move_if(self, from, expected, to, value, ttl_seconds).await?)
    }
}
