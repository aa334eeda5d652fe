//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

use super::parse_or;

/// Default access token lifetime (10 minutes)
pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 600;

/// Default refresh token lifetime (7 days)
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 604_800;

/// Tolerated clock difference when checking token expiry
pub const DEFAULT_CLOCK_SKEW_SECONDS: i64 = 60;

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// Refresh token cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            cookie: CookieConfig::from_env(),
        }
    }
}

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign tokens (HS256)
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_ttl: i64,

    /// Allowed clock skew in seconds when checking expiry
    #[serde(default = "default_clock_skew")]
    pub clock_skew: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_ttl: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_token_ttl: DEFAULT_REFRESH_TTL_SECONDS,
            clock_skew: DEFAULT_CLOCK_SKEW_SECONDS,
        }
    }
}

// Hand-written so the secret never ends up in logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &if self.secret.is_empty() { "<unset>" } else { "<redacted>" })
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("clock_skew", &self.clock_skew)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Recognized variables: `JWT_HS256_SECRET`, `JWT_ACCESS_TTL_SEC`,
    /// `JWT_REFRESH_TTL_SEC`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_HS256_SECRET").unwrap_or_default(),
            access_token_ttl: parse_or(lookup("JWT_ACCESS_TTL_SEC"), DEFAULT_ACCESS_TTL_SECONDS),
            refresh_token_ttl: parse_or(lookup("JWT_REFRESH_TTL_SEC"), DEFAULT_REFRESH_TTL_SECONDS),
            clock_skew: DEFAULT_CLOCK_SKEW_SECONDS,
        }
    }

    /// Set access token lifetime in seconds
    pub fn with_access_ttl(mut self, seconds: i64) -> Self {
        self.access_token_ttl = seconds;
        self
    }

    /// Set refresh token lifetime in seconds
    pub fn with_refresh_ttl(mut self, seconds: i64) -> Self {
        self.refresh_token_ttl = seconds;
        self
    }

    /// Whether a usable signing secret is configured
    pub fn has_secret(&self) -> bool {
        !self.secret.trim().is_empty()
    }
}

/// Refresh token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// SameSite attribute
    pub same_site: String,

    /// HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,

    /// Cookie path
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from(REFRESH_COOKIE_NAME),
            secure: true,
            same_site: String::from("Lax"),
            http_only: default_http_only(),
            path: String::from("/api/auth"),
        }
    }
}

impl CookieConfig {
    /// Create from environment variables
    ///
    /// Only `COOKIE_SECURE` is recognized so local HTTP setups can turn off
    /// the Secure flag.
    pub fn from_env() -> Self {
        Self {
            secure: parse_or(env::var("COOKIE_SECURE").ok(), true),
            ..Default::default()
        }
    }
}

fn default_clock_skew() -> i64 {
    DEFAULT_CLOCK_SKEW_SECONDS
}

fn default_http_only() -> bool {
    true
}
