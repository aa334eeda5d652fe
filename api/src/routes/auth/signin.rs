use actix_web::{web, HttpResponse};
use validator::Validate;

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::{AccessTokenResponse, SigninRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::state::AppState;

use super::cookie::refresh_cookie;

/// Handler for POST /api/auth/signin
///
/// Returns the access token in the body and sets the refresh token as an
/// HttpOnly cookie whose Max-Age is the refresh token lifetime.
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Invalid credentials
pub async fn signin<U, S, H, P>(
    state: web::Data<AppState<U, S, H, P>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let result = state
        .auth_service
        .signin(
            request.username.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    match result {
        Ok(pair) => HttpResponse::Ok()
            .cookie(refresh_cookie(
                &state.cookie,
                pair.refresh_token(),
                pair.refresh_max_age(),
            ))
            .json(AccessTokenResponse {
                access_token: pair.access_token().to_string(),
            }),
        Err(error) => handle_domain_error(error),
    }
}
