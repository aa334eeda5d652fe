//! Error kinds for authentication and token handling

use thiserror::Error;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Admin privileges required")]
    AdminRequired,

    #[error("Authentication required")]
    AuthenticationRequired,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::UsernameTaken => "USERNAME_TAKEN",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::AdminRequired => "ADMIN_REQUIRED",
            AuthError::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
        }
    }
}

/// Token verification and rotation failures
///
/// `RefreshReuseOrUnknown` deliberately covers both an already rotated token
/// and one that was never issued.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Invalid refresh token")]
    RefreshReuseOrUnknown,

    #[error("Token subject no longer exists")]
    PrincipalNotFound,
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Malformed => "MALFORMED_TOKEN",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::RefreshReuseOrUnknown => "INVALID_REFRESH_TOKEN",
            TokenError::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
        }
    }
}
