//! Redis client implementation
//!
//! A thin async wrapper around a multiplexed Redis connection. Connecting
//! retries with backoff at startup; individual commands never retry and are
//! bounded by the configured response timeout, so a stalled store surfaces
//! as an error instead of a hung request.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult, Script};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use mb_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Atomically move KEYS[1] to KEYS[2] when it exists and, if ARGV[1] is
/// non-empty, holds exactly ARGV[1]. Returns the old value or nil.
const MOVE_IF_SCRIPT: &str = r#"
local current = redis.call('GET', KEYS[1])
if not current then
  return nil
end
if ARGV[1] ~= '' and current ~= ARGV[1] then
  return nil
end
redis.call('DEL', KEYS[1])
redis.call('SET', KEYS[2], ARGV[2], 'EX', ARGV[3])
return current
"#;

/// Redis client with startup retry and per-command timeouts
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
    /// Upper bound for a single command
    response_timeout: Duration,
    /// Compiled compare-and-move script
    move_script: Arc<Script>,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// # Example
    /// ```no_run
    /// use mb_infra::cache::RedisClient;
    /// use mb_shared::config::CacheConfig;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let client = RedisClient::new(CacheConfig::new("redis://localhost:6379")).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 100).await
    }

    /// Create a new Redis client with a custom base delay between connect attempts
    pub async fn new_with_retry_config(
        config: CacheConfig,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(
            client,
            config.connect_retries.max(1),
            retry_delay_ms,
            Duration::from_secs(config.connection_timeout),
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            response_timeout: Duration::from_secs(config.response_timeout),
            config,
            move_script: Arc::new(Script::new(MOVE_IF_SCRIPT)),
        })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
        connect_timeout: Duration,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let outcome = timeout(connect_timeout, client.get_multiplexed_async_connection()).await;
            let failure = match outcome {
                Ok(Ok(connection)) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Ok(Err(e)) if attempts < max_retries && is_retriable_error(&e) => e.to_string(),
                Ok(Err(e)) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
                Err(_) if attempts < max_retries => "connect timed out".to_string(),
                Err(_) => {
                    error!("Timed out connecting to Redis after {} attempts", attempts);
                    return Err(InfrastructureError::Timeout {
                        operation: "CONNECT",
                        seconds: connect_timeout.as_secs(),
                    });
                }
            };

            warn!(
                "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                attempts, max_retries, failure, delay
            );
            sleep(Duration::from_millis(delay)).await;
            // Exponential backoff with cap at 5 seconds
            delay = (delay * 2).min(5000);
        }
    }

    /// Apply the configured key prefix
    fn key(&self, key: &str) -> String {
        self.config.make_key(key)
    }

    /// Run one command under the response timeout
    async fn execute<T, F>(&self, operation: &'static str, command: F) -> Result<T, InfrastructureError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match timeout(self.response_timeout, command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("Redis {} failed: {}", operation, e);
                Err(InfrastructureError::Cache(e))
            }
            Err(_) => {
                error!(
                    "Redis {} timed out after {}s",
                    operation,
                    self.response_timeout.as_secs()
                );
                Err(InfrastructureError::Timeout {
                    operation,
                    seconds: self.response_timeout.as_secs(),
                })
            }
        }
    }

    /// Set a value with expiration time
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);
        let mut conn = self.connection.clone();
        let key = self.key(key);
        let value = value.to_string();

        self.execute("SETEX", async move {
            conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await
        })
        .await
    }

    /// Set a value without expiry
    pub async fn set(&self, key: &str, value: &str) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}'", key);
        let mut conn = self.connection.clone();
        let key = self.key(key);
        let value = value.to_string();

        self.execute("SET", async move { conn.set::<_, _, ()>(key, value).await })
            .await
    }

    /// Set a value only if the key does not exist; true if it was written
    pub async fn set_nx(&self, key: &str, value: &str) -> Result<bool, InfrastructureError> {
        debug!("Setting key '{}' if absent", key);
        let mut conn = self.connection.clone();
        let key = self.key(key);
        let value = value.to_string();

        self.execute("SETNX", async move { conn.set_nx::<_, _, bool>(key, value).await })
            .await
    }

    /// Get a value; `None` if missing or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);
        let mut conn = self.connection.clone();
        let key = self.key(key);

        self.execute("GET", async move { conn.get::<_, Option<String>>(key).await })
            .await
    }

    /// Delete a key; true if it existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);
        let mut conn = self.connection.clone();
        let key = self.key(key);

        let deleted: u32 = self
            .execute("DEL", async move { conn.del::<_, u32>(key).await })
            .await?;
        Ok(deleted > 0)
    }

    /// Check if a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let key = self.key(key);

        self.execute("EXISTS", async move { conn.exists::<_, bool>(key).await })
            .await
    }

    /// Get time-to-live for a key
    ///
    /// `None` if the key doesn't exist or has no expiry.
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let key = self.key(key);

        let ttl: i64 = self
            .execute("TTL", async move { conn.ttl::<_, i64>(key).await })
            .await?;
        Ok(if ttl >= 0 { Some(ttl) } else { None })
    }

    /// Compare-and-move in one server-side step, see `MOVE_IF_SCRIPT`
    pub async fn move_if(
        &self,
        from: &str,
        expected: Option<&str>,
        to: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<Option<String>, InfrastructureError> {
        debug!("Moving key '{}' to '{}'", from, to);
        let mut conn = self.connection.clone();
        let mut invocation = self.move_script.prepare_invoke();
        invocation
            .key(self.key(from))
            .key(self.key(to))
            .arg(expected.unwrap_or(""))
            .arg(value)
            .arg(ttl_seconds);

        self.execute("EVALSHA", async move {
            invocation.invoke_async::<_, Option<String>>(&mut conn).await
        })
        .await
    }

    /// Add a member to a sorted set
    pub async fn zadd(&self, key: &str, member: &str, score: i64) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        let key = self.key(key);
        let member = member.to_string();

        self.execute("ZADD", async move {
            conn.zadd::<_, _, _, ()>(key, member, score).await
        })
        .await
    }

    /// All members of a sorted set, highest score first
    pub async fn zrevrange_all(&self, key: &str) -> Result<Vec<String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let key = self.key(key);

        self.execute("ZREVRANGE", async move {
            conn.zrevrange::<_, Vec<String>>(key, 0, -1).await
        })
        .await
    }

    /// Remove a member from a sorted set
    pub async fn zrem(&self, key: &str, member: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let key = self.key(key);
        let member = member.to_string();

        let removed: u32 = self
            .execute("ZREM", async move { conn.zrem::<_, _, u32>(key, member).await })
            .await?;
        Ok(removed > 0)
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();

        let response: String = self
            .execute("PING", async move {
                redis::cmd("PING").query_async::<_, String>(&mut conn).await
            })
            .await?;

        if response == "PONG" {
            debug!("Redis health check passed");
            Ok(true)
        } else {
            warn!("Redis health check returned unexpected response: {}", response);
            Ok(false)
        }
    }
}

/// Whether a connect error is transient and worth another attempt
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask credentials in a Redis URL for logging
pub fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
