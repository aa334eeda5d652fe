use actix_web::{web, HttpResponse};

use mb_core::repositories::{KeyValueStore, PostRepository, UserRepository};
use mb_core::services::PasswordHasher;

use crate::dto::HealthResponse;
use crate::state::AppState;

const PROBE_KEY: &str = "health:probe";

/// Handler for GET /health
///
/// Performs one store round trip; 503 when the store does not answer.
pub async fn health<U, S, H, P>(state: web::Data<AppState<U, S, H, P>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    H: PasswordHasher + 'static,
    P: PostRepository + 'static,
{
    let store_healthy = match state.store.exists(PROBE_KEY).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Health check store probe failed: {}", e);
            false
        }
    };

    let body = HealthResponse::from_store(store_healthy, env!("CARGO_PKG_VERSION"));
    if body.is_healthy() {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
