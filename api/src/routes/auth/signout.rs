use actix_web::{web, HttpRequest, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::MessageResponse;
use crate::state::AppState;

use super::cookie::clear_refresh_cookie;

/// Handler for POST /api/auth/signout
///
/// Revokes the refresh token from the cookie when there is one and clears
/// the cookie. Always answers 200: a token that was already rotated or
/// revoked is not an error here.
pub async fn signout<U, S, H, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, H, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let presented = req
        .cookie(&state.cookie.name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty());

    let revoked = state.auth_service.signout(presented.as_deref()).await;
    log::info!("User signed out (token revoked: {})", revoked);

    HttpResponse::Ok()
        .cookie(clear_refresh_cookie(&state.cookie))
        .json(MessageResponse::new("Signed out successfully"))
}
