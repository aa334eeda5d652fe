use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::AccessTokenResponse;
use crate::handlers::error::{error_response, handle_domain_error};
use crate::state::AppState;

use super::cookie::refresh_cookie;

/// Handler for POST /api/auth/refresh
///
/// Rotates the refresh token from the cookie: the presented token is
/// blacklisted and a new pair is issued. Presenting it again fails.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "accessToken": "eyJ..." }
/// ```
/// with a rotated `refreshToken` cookie.
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, expired or already used refresh token
/// - 503 Service Unavailable: Store unreachable
pub async fn refresh<U, S, H, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, H, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let presented = match req.cookie(&state.cookie.name) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
        _ => {
            log::warn!("Refresh request missing refresh token cookie");
            return error_response(
                StatusCode::UNAUTHORIZED,
                "refresh_token_required",
                "Refresh token required",
            );
        }
    };

    match state.auth_service.refresh(&presented).await {
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
