use actix_web::{web, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::DeletePostResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for DELETE /api/posts/{id}
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 403 Forbidden: Caller is not an admin
/// - 404 Not Found: Unknown post
pub async fn delete_post<U, S, H, P>(
    state: web::Data<AppState<U, S, H, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let post_id = path.into_inner();

    match state.post_service.delete(&auth.claims, &post_id).await {
        Ok(()) => {
            log::info!("Post {} deleted by admin {}", post_id, auth.user_id());
            HttpResponse::Ok().json(DeletePostResponse { success: true })
        }
        Err(error) => handle_domain_error(error),
    }
}
