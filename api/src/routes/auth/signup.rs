use actix_web::{web, HttpResponse};
use validator::Validate;

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::{MessageResponse, SignupRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::state::AppState;

/// Handler for POST /api/auth/signup
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "User created successfully" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing field or invalid email
/// - 409 Conflict: Username or email already exists
pub async fn signup<U, S, H, P>(
    state: web::Data<AppState<U, S, H, P>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let request = request.into_inner();

    // Incomplete bodies fall through so the service reports the missing fields
    if request.is_complete() {
        if let Err(errors) = request.validate() {
            return validation_error_response(errors);
        }
    }

    let result = state
        .auth_service
        .signup(
            request.username.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    match result {
        Ok(user) => {
            log::info!("User created successfully: {}", user.username);
            HttpResponse::Created().json(MessageResponse::new("User created successfully"))
        }
        Err(error) => handle_domain_error(error),
    }
}
