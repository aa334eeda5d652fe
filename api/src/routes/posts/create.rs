use actix_web::{web, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::CreatePostRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/posts
///
/// # Request Body
///
/// ```json
/// { "message": "hello" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty message
/// - 401 Unauthorized: Missing or invalid access token
pub async fn create_post<U, S, H, P>(
    state: web::Data<AppState<U, S, H, P>>,
    auth: AuthContext,
    request: web::Json<CreatePostRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let message = request.message.as_deref().unwrap_or_default();

    match state.post_service.create(&auth.claims, message).await {
        Ok(post) => {
            log::info!(
                "Post {} created by {}",
                post.id,
                auth.username().unwrap_or(auth.user_id())
            );
            HttpResponse::Ok().json(post)
        }
        Err(error) => handle_domain_error(error),
    }
}
