//! Shared application state handed to every handler

use std::sync::Arc;

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::{AuthService, PasswordHasher, PostService, RefreshLedger, TokenService};
use mb_shared::config::CookieConfig;

/// Services wired once at startup and shared across workers
pub struct AppState<U, S, H, P>
where
    U: UserRepository,
    S: KeyValueStore,
    H: PasswordHasher,
    P: PostRepository,
{
    pub auth_service: Arc<AuthService<U, S, H>>,
    pub post_service: Arc<PostService<P>>,
    pub token_service: Arc<TokenService>,
    /// Probed by the health endpoint
    pub store: Arc<S>,
    pub cookie: CookieConfig,
}

impl<U, S, H, P> AppState<U, S, H, P>
where
    U: UserRepository,
    S: KeyValueStore,
    H: PasswordHasher,
    P: PostRepository,
{
    pub fn new(
        users: Arc<U>,
        store: Arc<S>,
        hasher: Arc<H>,
        posts: Arc<P>,
        token_service: Arc<TokenService>,
        cookie: CookieConfig,
    ) -> Self {
        let ledger = Arc::new(RefreshLedger::new(
            store.clone(),
            users.clone(),
            token_service.clone(),
        ));

        Self {
            auth_service: Arc::new(AuthService::new(users, hasher, ledger)),
            post_service: Arc::new(PostService::new(posts)),
            token_service,
            store,
            cookie,
        }
    }
}
