//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_auth_error_messages() {
    assert_eq!(AuthError::UsernameTaken.to_string(), "Username already exists");
    assert_eq!(AuthError::EmailTaken.to_string(), "Email already exists");
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    assert_eq!(AuthError::AdminRequired.to_string(), "Admin privileges required");
}

#[test]
fn test_token_error_conversion() {
    let error: DomainError = TokenError::Expired.into();
    assert!(matches!(error, DomainError::Token(TokenError::Expired)));
    assert_eq!(error.code(), "TOKEN_EXPIRED");
    assert_eq!(error.to_string(), "Token expired");
}

#[test]
fn test_reuse_and_unknown_share_one_message() {
    // Callers must not learn whether the token was rotated or never issued.
    assert_eq!(
        TokenError::RefreshReuseOrUnknown.to_string(),
        "Invalid refresh token"
    );
}

#[test]
fn test_domain_error_codes() {
    assert_eq!(DomainError::validation("Message is required").code(), "VALIDATION_ERROR");
    assert_eq!(
        DomainError::StoreUnavailable {
            message: "timeout".to_string()
        }
        .code(),
        "STORE_UNAVAILABLE"
    );
    assert_eq!(DomainError::from(AuthError::EmailTaken).code(), "EMAIL_TAKEN");
}
