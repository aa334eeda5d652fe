//! User repository over a key-value store
//!
//! Layout:
//! - `user:{id}` - the user as JSON
//! - `user:byname:{username}` - id lookup by login name
//! - `user:byemail:{email}` - id lookup by email
//!
//! New accounts claim both index keys with set-if-absent before the document
//! is written, so concurrent signups cannot share a name or email.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use mb_core::domain::entities::user::User;
use mb_core::errors::{AuthError, DomainError};
use mb_core::repositories::{KeyValueStore, UserRepository};

use crate::InfrastructureError;

fn user_key(id: &str) -> String {
    format!("user:{}", id)
}

fn username_key(username: &str) -> String {
    format!("user:byname:{}", username)
}

fn email_key(email: &str) -> String {
    format!("user:byemail:{}", email.to_lowercase())
}

/// `UserRepository` on top of any `KeyValueStore`
pub struct KeyValueUserRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> KeyValueUserRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KeyValueStore> UserRepository for KeyValueUserRepository<S> {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let raw = match self.store.get(&user_key(id)).await? {
            Some(raw) => raw,
            None => {
                debug!(user_id = %id, "User not found");
                return Ok(None);
            }
        };
        let user = serde_json::from_str(&raw).map_err(InfrastructureError::from)?;
        Ok(Some(user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        match self.store.get(&username_key(username)).await? {
            Some(id) => {
                let user = self.find_by_id(&id).await?;
                if user.is_none() {
                    warn!(username = %username, user_id = %id, "Dangling username index");
                }
                Ok(user)
            }
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.store.exists(&username_key(username)).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.store.exists(&email_key(email)).await
    }

    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let name_key = username_key(&user.username);
        if !self.store.set_nx(&name_key, &user.id).await? {
            warn!(username = %user.username, "Username claimed concurrently");
            return Err(AuthError::UsernameTaken.into());
        }

        if !self.store.set_nx(&email_key(&user.email), &user.id).await? {
            warn!(user_id = %user.id, "Email claimed concurrently");
            if let Err(e) = self.store.del(&name_key).await {
                warn!(username = %user.username, error = %e, "Failed to release username claim");
            }
            return Err(AuthError::EmailTaken.into());
        }

        let json = serde_json::to_string(user).map_err(InfrastructureError::from)?;
        self.store.set(&user_key(&user.id), &json).await?;
        debug!(user_id = %user.id, "User created");
        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let json = serde_json::to_string(user).map_err(InfrastructureError::from)?;
        self.store.set(&user_key(&user.id), &json).await?;
        self.store.set(&username_key(&user.username), &user.id).await?;
        self.store.set(&email_key(&user.email), &user.id).await?;
        debug!(user_id = %user.id, "User saved");
        Ok(())
    }
}
