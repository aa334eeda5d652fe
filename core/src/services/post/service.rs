//! Post service: listing, creation and admin-only deletion

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::post::Post;
use crate::domain::entities::token::Claims;
use crate::domain::entities::user::ROLE_ADMIN;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::PostRepository;

pub struct PostService<P: PostRepository> {
    repository: Arc<P>,
}

impl<P: PostRepository> PostService<P> {
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// All posts, newest first
    pub async fn list(&self) -> DomainResult<Vec<Post>> {
        self.repository.find_all().await
    }

    /// Create a post authored by the access token's subject
    pub async fn create(&self, author: &Claims, message: &str) -> DomainResult<Post> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::validation("Message is required"));
        }

        let post = Post::new(message.to_string(), author.sub.clone());
        self.repository.save(&post).await?;

        info!(post_id = %post.id, user_id = %author.sub, length = message.len(), "Post created");
        Ok(post)
    }

    /// Delete a post; requires the `admin` role
    ///
    /// The role check runs before the existence check, so non-admins learn
    /// nothing about which ids exist.
    pub async fn delete(&self, actor: &Claims, post_id: &str) -> DomainResult<()> {
        if !actor.has_role(ROLE_ADMIN) {
            warn!(user_id = %actor.sub, "Post deletion denied for non-admin");
            return Err(AuthError::AdminRequired.into());
        }

        if !self.repository.delete(post_id).await? {
            return Err(DomainError::NotFound {
                resource: format!("Post {}", post_id),
            });
        }

        info!(post_id = %post_id, user_id = %actor.sub, "Post deleted");
        Ok(())
    }
}
