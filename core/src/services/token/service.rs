//! Main token service implementation

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, SignedToken, TokenKind, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies HS256 access and refresh tokens
///
/// Verification is pure computation: no store lookups happen here. Refresh
/// token revocation is handled by the ledger on top of this service.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// `DomainError::Config` when the secret is empty or a lifetime is not
    /// positive. This is meant to abort startup.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.trim().is_empty() {
            return Err(DomainError::Config {
                message: "JWT_HS256_SECRET must be set to a non-empty value".to_string(),
            });
        }
        if config.access_token_ttl <= 0 || config.refresh_token_ttl <= 0 {
            return Err(DomainError::Config {
                message: "token lifetimes must be positive".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked by hand so the skew window and the clock are ours.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_ttl(&self) -> i64 {
        self.config.refresh_token_ttl
    }

    /// Issues an access token embedding the user's name and roles
    pub fn issue_access(&self, user: &User) -> Result<SignedToken, DomainError> {
        let claims = Claims::for_access(user, now(), self.config.access_token_ttl);
        self.sign(claims)
    }

    /// Issues a refresh token carrying only the subject
    pub fn issue_refresh(&self, user: &User) -> Result<SignedToken, DomainError> {
        let claims = Claims::for_refresh(&user.id, now(), self.config.refresh_token_ttl);
        self.sign(claims)
    }

    /// Issues a fresh access + refresh pair
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        Ok(TokenPair {
            access: self.issue_access(user)?,
            refresh: self.issue_refresh(user)?,
        })
    }

    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, TokenKind::Access, now())
    }

    pub fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, TokenKind::Refresh, now())
    }

    /// Verifies a token of the given kind against an explicit clock
    ///
    /// A token is rejected as expired only once `exp` lies more than the
    /// configured skew in the past relative to `now`.
    pub(crate) fn verify_at(
        &self,
        token: &str,
        kind: TokenKind,
        now: i64,
    ) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::Malformed,
            })?;

        if claims.is_expired_at(now, self.config.clock_skew) {
            return Err(TokenError::Expired);
        }

        if claims.typ != kind {
            tracing::debug!(expected = %kind, actual = %claims.typ, "Token kind mismatch");
            return Err(TokenError::Malformed);
        }

        Ok(claims)
    }

    pub(crate) fn sign(&self, claims: Claims) -> Result<SignedToken, DomainError> {
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| DomainError::Internal {
                message: format!("failed to sign {} token: {}", claims.typ, e),
            },
        )?;
        Ok(SignedToken { token, claims })
    }
}

fn now() -> i64 {
    Utc::now().timestamp()
}
