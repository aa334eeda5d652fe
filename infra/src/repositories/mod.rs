//! Repository implementations
//!
//! - `user_repository` - users as JSON documents plus name/email indexes on
//!   any `KeyValueStore`
//! - `post_repository` - posts in Redis with a creation-time sorted set

mod post_repository;
mod user_repository;

pub use post_repository::RedisPostRepository;
pub use user_repository::KeyValueUserRepository;
