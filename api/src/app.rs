//! Application factory
//!
//! Builds the Actix-web application from an already wired [`AppState`].

use actix_web::{middleware::Logger, web, App, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{refresh, signin, signout, signup};
use crate::routes::health::health;
use crate::routes::posts::{create_post, delete_post, list_posts};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, S, H, P>(
    app_state: web::Data<AppState<U, S, H, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let tokens = app_state.token_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health::<U, S, H, P>))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<U, S, H, P>))
                        .route("/signin", web::post().to(signin::<U, S, H, P>))
                        .route("/refresh", web::post().to(refresh::<U, S, H, P>))
                        .route("/signout", web::post().to(signout::<U, S, H, P>)),
                )
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(list_posts::<U, S, H, P>))
                                .route(
                                    web::post()
                                        .to(create_post::<U, S, H, P>)
                                        .wrap(JwtAuth::new(tokens.clone())),
                                ),
                        )
                        .service(
                            web::resource("/{id}").route(
                                web::delete()
                                    .to(delete_post::<U, S, H, P>)
                                    .wrap(JwtAuth::new(tokens)),
                            ),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
