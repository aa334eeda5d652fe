//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::{to_bytes, MessageBody},
    cookie::Cookie,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, Error,
};
use mb_api::state::AppState;
use mb_core::repositories::UserRepository;
use mb_core::services::{TokenService, TokenServiceConfig};
use mb_infra::{BcryptHasher, InMemoryKeyValueStore, InMemoryPostRepository, KeyValueUserRepository};
use mb_shared::config::CookieConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestUsers = KeyValueUserRepository<InMemoryKeyValueStore>;
pub type TestState = AppState<TestUsers, InMemoryKeyValueStore, BcryptHasher, InMemoryPostRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<TestUsers>,
    pub store: Arc<InMemoryKeyValueStore>,
}

pub fn setup() -> TestContext {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let users = Arc::new(KeyValueUserRepository::new(store.clone()));
    let posts = Arc::new(InMemoryPostRepository::new());
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::with_secret(TEST_SECRET)).expect("token service"),
    );

    let state = web::Data::new(AppState::new(
        users.clone(),
        store.clone(),
        Arc::new(BcryptHasher::with_cost(4)),
        posts,
        tokens,
        CookieConfig::default(),
    ));

    TestContext {
        state,
        users,
        store,
    }
}

impl TestContext {
    /// Add the admin role to an existing user
    pub async fn promote(&self, username: &str) {
        let mut user = self
            .users
            .find_by_username(username)
            .await
            .unwrap()
            .expect("user exists");
        user.grant_role("admin");
        self.users.save(&user).await.unwrap();
    }
}

/// Call the app and return status plus JSON body
///
/// Middleware rejections come back as `Err`; they are rendered the way the
/// server would send them.
pub async fn call_json<S, R, B>(app: &S, req: R) -> (StatusCode, serde_json::Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let bytes = test::read_body(resp).await;
            (status, serde_json::from_slice(&bytes).unwrap_or_default())
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = to_bytes(resp.into_body()).await.unwrap();
            (status, serde_json::from_slice(&bytes).unwrap_or_default())
        }
    }
}

/// The `refreshToken` cookie set on a response, if any
pub fn refresh_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refreshToken")
        .map(|c| c.into_owned())
}

pub fn signup_body(username: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
    })
}

pub fn signin_body(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": password,
    })
}
