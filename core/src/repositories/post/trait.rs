//! Post repository trait.

use async_trait::async_trait;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

/// Repository trait for board posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a post and index it by creation time
    async fn save(&self, post: &Post) -> Result<(), DomainError>;

    /// All posts, newest first
    async fn find_all(&self) -> Result<Vec<Post>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError>;

    /// Delete a post; `Ok(false)` when it did not exist
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
