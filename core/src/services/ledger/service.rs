//! Rotation and revocation ledger implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{KeyValueStore, UserRepository};
use crate::services::token::TokenService;

/// Value stored under a blacklisted jti
pub const BLACKLISTED: &str = "1";

/// Store key of an active refresh token id
pub fn active_key(jti: &str) -> String {
    format!("rt:active:{}", jti)
}

/// Store key of a blacklisted refresh token id
pub fn blacklist_key(jti: &str) -> String {
    format!("rt:black:{}", jti)
}

/// Single-use refresh token bookkeeping
///
/// Per jti the state machine is `absent -> active -> blacklisted -> absent`,
/// the last step driven by store TTL alone. Nothing here moves a blacklisted
/// jti back to active, and revoking an absent jti writes nothing.
pub struct RefreshLedger<S, U>
where
    S: KeyValueStore,
    U: UserRepository,
{
    store: Arc<S>,
    users: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<S, U> RefreshLedger<S, U>
where
    S: KeyValueStore,
    U: UserRepository,
{
    pub fn new(store: Arc<S>, users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            users,
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    fn ledger_ttl(&self) -> u64 {
        // TokenService::new guarantees a positive lifetime.
        self.tokens.refresh_ttl().max(1) as u64
    }

    /// Records `jti` as active for `principal_id`, overwriting prior state
    pub async fn activate(
        &self,
        jti: &str,
        principal_id: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError> {
        self.store
            .set_ex(&active_key(jti), principal_id, ttl_seconds)
            .await
    }

    /// Issues a new token pair for `user` and activates its refresh jti
    pub async fn issue(&self, user: &User) -> Result<TokenPair, DomainError> {
        let pair = self.tokens.issue_pair(user)?;
        self.activate(pair.refresh.jti(), &user.id, self.ledger_ttl())
            .await?;
        debug!(user_id = %user.id, jti = %pair.refresh.jti(), "Refresh token activated");
        Ok(pair)
    }

    /// Exchanges an active refresh token for a new pair
    ///
    /// The presented jti is blacklisted with a compare-and-move that only
    /// succeeds while the active record still names the token's subject, so
    /// of several concurrent rotations of one token exactly one wins.
    pub async fn rotate(&self, presented: &str) -> Result<TokenPair, DomainError> {
        let claims = self.tokens.verify_refresh(presented)?;
        let active = active_key(&claims.jti);

        match self.store.get(&active).await? {
            Some(owner) if owner == claims.sub => {}
            Some(_) => {
                warn!(jti = %claims.jti, "Refresh token owner does not match subject");
                return Err(TokenError::RefreshReuseOrUnknown.into());
            }
            None => {
                warn!(jti = %claims.jti, "Refresh token is not active");
                return Err(TokenError::RefreshReuseOrUnknown.into());
            }
        }

        let user = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or(TokenError::PrincipalNotFound)?;

        let moved = self
            .store
            .move_if(
                &active,
                Some(&claims.sub),
                &blacklist_key(&claims.jti),
                BLACKLISTED,
                self.ledger_ttl(),
            )
            .await?;
        if moved.is_none() {
            warn!(jti = %claims.jti, "Refresh token consumed by a concurrent rotation");
            return Err(TokenError::RefreshReuseOrUnknown.into());
        }

        let pair = self.issue(&user).await?;
        info!(
            user_id = %user.id,
            old_jti = %claims.jti,
            new_jti = %pair.refresh.jti(),
            "Refresh token rotated"
        );
        Ok(pair)
    }

    /// Moves an active jti to the blacklist
    ///
    /// Returns whether anything was revoked. An unknown or already consumed
    /// jti is not an error.
    pub async fn revoke(&self, jti: &str) -> Result<bool, DomainError> {
        let moved = self
            .store
            .move_if(
                &active_key(jti),
                None,
                &blacklist_key(jti),
                BLACKLISTED,
                self.ledger_ttl(),
            )
            .await?;

        match moved {
            Some(owner) => {
                info!(user_id = %owner, jti = %jti, "Refresh token revoked");
                Ok(true)
            }
            None => {
                info!(jti = %jti, "Nothing to revoke, refresh token not active");
                Ok(false)
            }
        }
    }

    pub async fn is_active(&self, jti: &str) -> Result<bool, DomainError> {
        self.store.exists(&active_key(jti)).await
    }

    pub async fn is_blacklisted(&self, jti: &str) -> Result<bool, DomainError> {
        self.store.exists(&blacklist_key(jti)).await
    }
}
