//! Redis post repository
//!
//! Posts are stored as JSON under `post:{id}` and indexed in the sorted set
//! `posts_zset` scored by creation time in milliseconds.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use mb_core::domain::entities::post::Post;
use mb_core::errors::DomainError;
use mb_core::repositories::PostRepository;

use crate::cache::RedisClient;
use crate::InfrastructureError;

const POSTS_ZSET_KEY: &str = "posts_zset";

fn post_key(id: &str) -> String {
    format!("post:{}", id)
}

pub struct RedisPostRepository {
    client: Arc<RedisClient>,
}

impl RedisPostRepository {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostRepository for RedisPostRepository {
    async fn save(&self, post: &Post) -> Result<(), DomainError> {
        let json = serde_json::to_string(post).map_err(InfrastructureError::from)?;
        self.client.set(&post_key(&post.id), &json).await?;
        self.client
            .zadd(POSTS_ZSET_KEY, &post.id, post.created)
            .await?;
        debug!(post_id = %post.id, "Post saved");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let ids = self.client.zrevrange_all(POSTS_ZSET_KEY).await?;
        let mut posts = Vec::with_capacity(ids.len());
        for id in ids {
            match self.find_by_id(&id).await? {
                Some(post) => posts.push(post),
                None => warn!(post_id = %id, "Post indexed but missing"),
            }
        }
        debug!("Retrieved {} posts", posts.len());
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        match self.client.get(&post_key(id)).await? {
            Some(raw) => {
                let post = serde_json::from_str(&raw).map_err(InfrastructureError::from)?;
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let deleted = self.client.delete(&post_key(id)).await?;
        // Drop the index entry even when the document was already gone.
        self.client.zrem(POSTS_ZSET_KEY, id).await?;
        Ok(deleted)
    }
}
