//! Mapping from domain failures to HTTP responses
//!
//! Every handler funnels its errors through [`handle_domain_error`], so the
//! status table below is the only place that decides what a client sees.

use std::collections::HashMap;

use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use mb_core::errors::{AuthError, DomainError, TokenError};
use validator::ValidationErrors;

use crate::dto::ErrorResponse;

/// Build a JSON error response with the given status
pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(error, message))
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Config { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials | AuthError::AuthenticationRequired => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::AdminRequired => StatusCode::FORBIDDEN,
        },
        DomainError::Token(
            TokenError::Malformed
            | TokenError::InvalidSignature
            | TokenError::Expired
            | TokenError::RefreshReuseOrUnknown
            | TokenError::PrincipalNotFound,
        ) => StatusCode::UNAUTHORIZED,
    }
}

/// Message shown to the client; server-side details stay in the log
fn client_message(error: &DomainError) -> String {
    match error {
        DomainError::Validation { message } => message.clone(),
        DomainError::NotFound { resource } => format!("{} not found", resource),
        DomainError::StoreUnavailable { .. } => {
            "Service temporarily unavailable, please try again later".to_string()
        }
        DomainError::Config { .. } | DomainError::Internal { .. } => {
            "An internal error occurred".to_string()
        }
        DomainError::Auth(e) => e.to_string(),
        DomainError::Token(e) => e.to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);
    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Request rejected ({}): {}", status.as_u16(), error);
    }

    error_response(status, &error.code().to_lowercase(), client_message(&error))
}

/// 400 response listing the failing fields
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    let details: HashMap<String, serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let messages: Vec<String> = failures
                .iter()
                .map(|failure| {
                    failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string())
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Request validation failed").with_details(details),
    )
}

/// JSON extractor error handler: malformed bodies become a 400 JSON error
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, "invalid_json", err.to_string());
    InternalError::from_response(err, response).into()
}
