//! Configuration for the token service

use mb_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl: i64,
    /// Tolerated clock skew in seconds when checking expiry
    pub clock_skew: i64,
}

impl TokenServiceConfig {
    /// Configuration with default lifetimes and the given secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self::from(&JwtConfig::new(secret))
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_ttl: config.access_token_ttl,
            refresh_token_ttl: config.refresh_token_ttl,
            clock_skew: config.clock_skew,
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"<redacted>")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("clock_skew", &self.clock_skew)
            .finish()
    }
}
