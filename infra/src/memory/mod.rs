//! In-process implementations of the store seams
//!
//! Backs the HTTP integration tests, which drive the full app without a
//! running Redis. State lives for the lifetime of the process only.

mod post_repository;
mod store;

pub use post_repository::InMemoryPostRepository;
pub use store::InMemoryKeyValueStore;
