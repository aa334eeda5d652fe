//! User entity representing a registered board member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Role every new account receives
pub const ROLE_USER: &str = "user";

/// Role allowed to delete posts
pub const ROLE_ADMIN: &str = "admin";

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user (UUID text)
    pub id: String,

    /// Unique login name
    pub username: String,

    /// Unique email address
    pub email: String,

    /// One-way password hash
    pub password_hash: String,

    /// Role names granted to the user
    pub roles: BTreeSet<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with the default `user` role
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let mut roles = BTreeSet::new();
        roles.insert(ROLE_USER.to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            roles,
            created_at: Utc::now(),
        }
    }

    /// Grants a role; returns `false` if the user already had it
    pub fn grant_role(&mut self, role: &str) -> bool {
        self.roles.insert(role.to_string())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new(
            "alice".to_string(),
            "a@x.com".to_string(),
            "hash".to_string(),
        )
    }

    #[test]
    fn test_new_user_creation() {
        let user = alice();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert!(Uuid::parse_str(&user.id).is_ok());
        assert!(user.has_role(ROLE_USER));
        assert!(!user.is_admin());
    }

    #[test]
    fn test_grant_role() {
        let mut user = alice();

        assert!(user.grant_role(ROLE_ADMIN));
        assert!(!user.grant_role(ROLE_ADMIN));
        assert!(user.is_admin());
        assert_eq!(user.roles.len(), 2);
    }

    #[test]
    fn test_user_ids_are_unique() {
        assert_ne!(alice().id, alice().id);
    }
}
