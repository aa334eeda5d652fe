use actix_web::{web, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /api/posts, newest first
pub async fn list_posts<U, S, H, P>(state: web::Data<AppState<U, S, H, P>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    match state.post_service.list().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(error) => handle_domain_error(error),
    }
}
