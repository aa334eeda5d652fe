//! bcrypt implementation of `PasswordHasher`
//!
//! bcrypt is CPU bound by design, so every hash and verify runs on the
//! tokio blocking pool instead of the request's executor thread.

use async_trait::async_trait;
use mb_core::errors::DomainError;
use mb_core::services::PasswordHasher;
use tokio::task;
use tracing::warn;

/// bcrypt password hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
    decoy: String,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Custom work factor; low values are only meant for tests
    pub fn with_cost(cost: u32) -> Self {
        let decoy = match bcrypt::hash("decoy-password", cost) {
            Ok(hash) => hash,
            Err(e) => {
                warn!("Could not prepare decoy hash at cost {}: {}", cost, e);
                String::new()
            }
        };
        Self { cost, decoy }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn join_failed(e: task::JoinError) -> DomainError {
    DomainError::Internal {
        message: format!("password hashing task failed: {}", e),
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_string();
        let cost = self.cost;

        task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(join_failed)?
            .map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            })
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_string();
        let hash = hash.to_string();

        let outcome = task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(join_failed)?;
        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                warn!("Stored password hash is unreadable: {}", e);
                Ok(false)
            }
        }
    }

    fn decoy_hash(&self) -> &str {
        &self.decoy
    }
}
