//! Tests for refresh token rotation and revocation

use std::sync::Arc;

use crate::domain::entities::user::{User, ROLE_ADMIN};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{KeyValueStore, MockKeyValueStore, MockUserRepository, UserRepository};
use crate::services::ledger::{active_key, blacklist_key, RefreshLedger, BLACKLISTED};
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    store: Arc<MockKeyValueStore>,
    users: Arc<MockUserRepository>,
    ledger: RefreshLedger<MockKeyValueStore, MockUserRepository>,
    user: User,
}

async fn fixture() -> Fixture {
    let store = Arc::new(MockKeyValueStore::new());
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::with_secret("ledger-test-secret")).unwrap(),
    );
    let user = User::new(
        "alice".to_string(),
        "a@x.com".to_string(),
        "hash".to_string(),
    );
    users.save(&user).await.unwrap();

    let ledger = RefreshLedger::new(store.clone(), users.clone(), tokens);
    Fixture {
        store,
        users,
        ledger,
        user,
    }
}

fn assert_reuse(result: Result<impl std::fmt::Debug, DomainError>) {
    match result {
        Err(DomainError::Token(TokenError::RefreshReuseOrUnknown)) => {}
        other => panic!("expected RefreshReuseOrUnknown, got {:?}", other),
    }
}

#[tokio::test]
async fn test_issue_activates_refresh_jti() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();

    let owner = f.store.get(&active_key(pair.refresh.jti())).await.unwrap();
    assert_eq!(owner.as_deref(), Some(f.user.id.as_str()));
    assert_eq!(
        f.store.ttl_of(&active_key(pair.refresh.jti())).await,
        Some(604_800)
    );
    // Access tokens never touch the ledger.
    assert!(!f.ledger.is_active(pair.access.jti()).await.unwrap());
}

#[tokio::test]
async fn test_rotation_is_single_use() {
    let f = fixture().await;
    let first = f.ledger.issue(&f.user).await.unwrap();
    let old_jti = first.refresh.jti().to_string();

    let second = f.ledger.rotate(first.refresh_token()).await.unwrap();
    let new_jti = second.refresh.jti().to_string();

    assert_ne!(old_jti, new_jti);
    assert!(f.ledger.is_active(&new_jti).await.unwrap());
    assert!(!f.ledger.is_active(&old_jti).await.unwrap());
    assert!(f.ledger.is_blacklisted(&old_jti).await.unwrap());
    assert_eq!(
        f.store.get(&blacklist_key(&old_jti)).await.unwrap().as_deref(),
        Some(BLACKLISTED)
    );
    assert_eq!(f.store.ttl_of(&blacklist_key(&old_jti)).await, Some(604_800));

    assert_reuse(f.ledger.rotate(first.refresh_token()).await);

    // The replacement keeps working.
    assert!(f.ledger.rotate(second.refresh_token()).await.is_ok());
}

#[tokio::test]
async fn test_rotation_picks_up_role_changes() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();

    let mut promoted = f.user.clone();
    promoted.grant_role(ROLE_ADMIN);
    f.users.save(&promoted).await.unwrap();

    let rotated = f.ledger.rotate(pair.refresh_token()).await.unwrap();
    assert!(rotated.access.claims.has_role(ROLE_ADMIN));
}

#[tokio::test]
async fn test_revoked_token_behaves_like_rotated() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();
    let jti = pair.refresh.jti().to_string();

    assert!(f.ledger.revoke(&jti).await.unwrap());
    assert!(f.ledger.is_blacklisted(&jti).await.unwrap());

    assert_reuse(f.ledger.rotate(pair.refresh_token()).await);
}

#[tokio::test]
async fn test_revoke_unknown_jti_is_noop() {
    let f = fixture().await;

    assert!(!f.ledger.revoke("never-issued").await.unwrap());
    assert!(!f.ledger.is_blacklisted("never-issued").await.unwrap());
    assert_eq!(f.store.len().await, 0);
}

#[tokio::test]
async fn test_revoke_twice_is_idempotent() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();

    assert!(f.ledger.revoke(pair.refresh.jti()).await.unwrap());
    assert!(!f.ledger.revoke(pair.refresh.jti()).await.unwrap());
    assert!(f.ledger.is_blacklisted(pair.refresh.jti()).await.unwrap());
}

#[tokio::test]
async fn test_never_activated_token_is_rejected() {
    let f = fixture().await;
    let stray = f.ledger.tokens().issue_refresh(&f.user).unwrap();

    assert_reuse(f.ledger.rotate(&stray.token).await);
    assert!(!f.ledger.is_blacklisted(stray.jti()).await.unwrap());
}

#[tokio::test]
async fn test_owner_mismatch_is_rejected() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();
    f.store
        .set_ex(&active_key(pair.refresh.jti()), "someone-else", 60)
        .await
        .unwrap();

    assert_reuse(f.ledger.rotate(pair.refresh_token()).await);
    // The foreign record is left untouched.
    assert!(f.ledger.is_active(pair.refresh.jti()).await.unwrap());
}

#[tokio::test]
async fn test_deleted_principal_is_rejected() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();
    f.users.remove(&f.user.id).await;

    match f.ledger.rotate(pair.refresh_token()).await {
        Err(DomainError::Token(TokenError::PrincipalNotFound)) => {}
        other => panic!("expected PrincipalNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_access_token_cannot_rotate() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();

    match f.ledger.rotate(pair.access_token()).await {
        Err(DomainError::Token(TokenError::Malformed)) => {}
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_rotation_has_one_winner() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();
    let token = pair.refresh_token();

    let (a, b, c) = tokio::join!(
        f.ledger.rotate(token),
        f.ledger.rotate(token),
        f.ledger.rotate(token)
    );

    let winners = [a.is_ok(), b.is_ok(), c.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(winners, 1);
    for result in [a, b, c] {
        if let Err(err) = result {
            assert!(matches!(
                err,
                DomainError::Token(TokenError::RefreshReuseOrUnknown)
            ));
        }
    }
}

#[tokio::test]
async fn test_store_outage_surfaces_as_unavailable() {
    let f = fixture().await;
    let pair = f.ledger.issue(&f.user).await.unwrap();
    f.store.set_unavailable(true);

    let err = f.ledger.rotate(pair.refresh_token()).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}
