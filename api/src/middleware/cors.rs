//! CORS middleware configuration for cross-origin requests.
//!
//! The board's browser client sends JSON with a bearer token and relies on
//! the refresh cookie, so credentials are always allowed. In production the
//! allowed origins come from `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use mb_shared::config::Environment;
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if Environment::from_env().is_production() {
        let origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        create_production_cors(&origins, max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn base_cors(max_age: usize) -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(max_age)
        .supports_credentials()
}

/// Any origin is accepted in development
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");
    base_cors(max_age).allow_any_origin()
}

fn create_production_cors(allowed_origins: &str, max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = base_cors(max_age);
    for origin in allowed_origins.split(',').map(|s| s.trim()) {
        if !origin.is_empty() {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}
