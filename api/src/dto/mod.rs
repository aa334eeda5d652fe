pub mod auth;
pub mod post;

pub use auth::{AccessTokenResponse, SigninRequest, SignupRequest};
pub use mb_shared::types::{ErrorResponse, HealthResponse, MessageResponse};
pub use post::{CreatePostRequest, DeletePostResponse};
