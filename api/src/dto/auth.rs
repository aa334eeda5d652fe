use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/auth/signup`
///
/// Fields are optional so a missing one reaches the service and gets the
/// same 400 message as a blank one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,
}

impl SignupRequest {
    /// True when username and email are non-blank and a password is given
    pub fn is_complete(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.username)
            && present(&self.email)
            && self.password.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Body of `POST /api/auth/signin`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,
}

/// Returned by signin and refresh; the refresh token travels in a cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
