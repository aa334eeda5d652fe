//! In-memory post repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use mb_core::domain::entities::post::Post;
use mb_core::errors::DomainError;
use mb_core::repositories::PostRepository;

#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<String, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, post: &Post) -> Result<(), DomainError> {
        self.posts
            .write()
            .await
            .insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        // Same order as ZREVRANGE: score descending, then member descending.
        posts.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.posts.write().await.remove(id).is_some())
    }
}
