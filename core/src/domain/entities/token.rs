//! Token entities for JWT-based authentication.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::user::User;

/// Which of the two token flavours a JWT is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for JWT payload
///
/// `username` and `roles` are only present on access tokens. Refresh tokens
/// carry the subject alone so the user is re-read on every rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Token kind
    pub typ: TokenKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<BTreeSet<String>>,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn for_access(user: &User, now: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: user.id.clone(),
            iat: now,
            exp: now + ttl_seconds,
            jti: Uuid::new_v4().to_string(),
            typ: TokenKind::Access,
            username: Some(user.username.clone()),
            roles: Some(user.roles.clone()),
        }
    }

    /// Creates new claims for a refresh token
    pub fn for_refresh(user_id: &str, now: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: now,
            exp: now + ttl_seconds,
            jti: Uuid::new_v4().to_string(),
            typ: TokenKind::Refresh,
            username: None,
            roles: None,
        }
    }

    /// Whether the claims are expired at `now`, tolerating `skew` seconds
    pub fn is_expired_at(&self, now: i64, skew: i64) -> bool {
        self.exp < now - skew
    }

    /// Checks an embedded role; always false for refresh claims
    pub fn has_role(&self, role: &str) -> bool {
        self.roles
            .as_ref()
            .map(|roles| roles.contains(role))
            .unwrap_or(false)
    }
}

/// A signed JWT together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    pub token: String,
    pub claims: Claims,
}

impl SignedToken {
    pub fn jti(&self) -> &str {
        &self.claims.jti
    }

    /// Seconds from issuance to expiry
    pub fn lifetime(&self) -> i64 {
        self.claims.exp - self.claims.iat
    }
}

/// Token pair returned on sign-in and rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: SignedToken,
    pub refresh: SignedToken,
}

impl TokenPair {
    pub fn access_token(&self) -> &str {
        &self.access.token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh.token
    }

    /// Lifetime of the refresh token in seconds, used as cookie Max-Age
    pub fn refresh_max_age(&self) -> i64 {
        self.refresh.lifetime()
    }
}
