//! Unit tests for the mock key-value store

use crate::errors::DomainError;
use crate::repositories::store::{KeyValueStore, MockKeyValueStore};

#[tokio::test]
async fn test_set_get_del() {
    let store = MockKeyValueStore::new();

    store.set("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    assert!(store.exists("k").await.unwrap());

    assert!(store.del("k").await.unwrap());
    assert!(!store.del("k").await.unwrap());
    assert!(store.get("k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_move_if_requires_expected_value() {
    let store = MockKeyValueStore::new();
    store.set_ex("from", "owner-1", 60).await.unwrap();

    let moved = store
        .move_if("from", Some("owner-2"), "to", "1", 60)
        .await
        .unwrap();
    assert!(moved.is_none());
    assert!(store.exists("from").await.unwrap());
    assert!(!store.exists("to").await.unwrap());

    let moved = store
        .move_if("from", Some("owner-1"), "to", "1", 30)
        .await
        .unwrap();
    assert_eq!(moved.as_deref(), Some("owner-1"));
    assert!(!store.exists("from").await.unwrap());
    assert_eq!(store.ttl_of("to").await, Some(30));
}

#[tokio::test]
async fn test_move_if_missing_source_writes_nothing() {
    let store = MockKeyValueStore::new();

    let moved = store.move_if("missing", None, "to", "1", 60).await.unwrap();
    assert!(moved.is_none());
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn test_unavailable_store_fails_every_call() {
    let store = MockKeyValueStore::new();
    store.set_unavailable(true);

    let err = store.get("k").await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}
