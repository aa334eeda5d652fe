//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{KeyValueStore, UserRepository};
use crate::services::ledger::RefreshLedger;

use super::password::PasswordHasher;

/// Authentication service covering signup, signin, refresh and signout
pub struct AuthService<U, S, H>
where
    U: UserRepository,
    S: KeyValueStore,
    H: PasswordHasher,
{
    /// User repository for account lookups
    user_repository: Arc<U>,
    /// Password hashing primitive
    hasher: Arc<H>,
    /// Refresh token ledger (owns the token service)
    ledger: Arc<RefreshLedger<S, U>>,
}

impl<U, S, H> AuthService<U, S, H>
where
    U: UserRepository,
    S: KeyValueStore,
    H: PasswordHasher,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>, ledger: Arc<RefreshLedger<S, U>>) -> Self {
        Self {
            user_repository,
            hasher,
            ledger,
        }
    }

    pub fn ledger(&self) -> &RefreshLedger<S, U> {
        &self.ledger
    }

    /// Register a new account with the default `user` role
    ///
    /// Username uniqueness is checked before email uniqueness. The lookups
    /// give the usual errors; the repository insert is what settles a race
    /// between two signups for the same name.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> DomainResult<User> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation(
                "Username, email, and password are required",
            ));
        }

        if self.user_repository.exists_by_username(username).await? {
            warn!(username = %username, "Signup rejected, username taken");
            return Err(AuthError::UsernameTaken.into());
        }
        if self.user_repository.exists_by_email(email).await? {
            warn!(username = %username, "Signup rejected, email taken");
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = self.hasher.hash(password).await?;
        let user = User::new(username.to_string(), email.to_string(), password_hash);
        self.user_repository.create(&user).await?;

        info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Check credentials and issue a token pair
    ///
    /// Unknown users and wrong passwords are indistinguishable to the caller.
    pub async fn signin(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("Username and password are required"));
        }

        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                debug!(username = %username, "Signin for unknown user");
                self.hasher.verify(password, self.hasher.decoy_hash()).await?;
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            warn!(username = %username, "Signin with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.ledger.issue(&user).await?;
        info!(user_id = %user.id, "User signed in");
        Ok(pair)
    }

    /// Rotate a refresh token into a new pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        self.ledger.rotate(refresh_token).await
    }

    /// Revoke the presented refresh token, if any
    ///
    /// Never fails: an invalid, expired or already consumed token simply has
    /// nothing to revoke, and store failures are logged. Returns whether a
    /// token was actually revoked.
    pub async fn signout(&self, refresh_token: Option<&str>) -> bool {
        let token = match refresh_token {
            Some(token) if !token.is_empty() => token,
            _ => return false,
        };

        let claims = match self.ledger.tokens().verify_refresh(token) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "Signout with unusable refresh token");
                return false;
            }
        };

        match self.ledger.revoke(&claims.jti).await {
            Ok(revoked) => revoked,
            Err(err) => {
                warn!(jti = %claims.jti, error = %err, "Failed to revoke refresh token on signout");
                false
            }
        }
    }
}
