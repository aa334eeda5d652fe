use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use mb_api::app::create_app;
use mb_api::state::AppState;
use mb_core::services::{TokenService, TokenServiceConfig};
use mb_infra::{BcryptHasher, KeyValueUserRepository, RedisClient, RedisPostRepository};
use mb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // RUST_LOG wins over the per-environment default level
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!(
        "Starting Mini Board API Server ({} environment)",
        config.environment
    );

    // A missing secret is fatal here, never per request
    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.auth.jwt))
            .context("invalid JWT configuration")?,
    );

    let redis = Arc::new(
        RedisClient::new(config.cache.clone())
            .await
            .context("failed to connect to Redis")?,
    );

    let users = Arc::new(KeyValueUserRepository::new(redis.clone()));
    let posts = Arc::new(RedisPostRepository::new(redis.clone()));
    let hasher = Arc::new(BcryptHasher::new());

    let app_state = web::Data::new(AppState::new(
        users,
        redis,
        hasher,
        posts,
        token_service,
        config.auth.cookie.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
