//! Mock implementation of PostRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

use super::trait_::PostRepository;

/// Mock post repository keeping posts in insertion order
#[derive(Clone, Default)]
pub struct MockPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl MockPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn save(&self, post: &Post) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        posts.retain(|p| p.id != post.id);
        posts.push(post.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }
}
