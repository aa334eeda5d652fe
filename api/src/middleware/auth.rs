//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the access token from the Authorization header,
//! verifies it with the core `TokenService`, and injects the claims into the
//! request. Access tokens are never checked against the refresh ledger.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use mb_core::domain::entities::token::Claims;
use mb_core::services::TokenService;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::error_response;

/// Error code clients use to decide whether to call `/api/auth/refresh`
const UNAUTHORIZED_CODE: &str = "token_expired";

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: Claims,
}

impl AuthContext {
    pub fn user_id(&self) -> &str {
        &self.claims.sub
    }

    pub fn username(&self) -> Option<&str> {
        self.claims.username.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.claims.has_role(mb_core::domain::entities::ROLE_ADMIN)
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    log::warn!(
                        "Missing or invalid Authorization header for {} {}",
                        req.method(),
                        req.path()
                    );
                    return Err(unauthorized("Missing or invalid Authorization header"));
                }
            };

            let claims = match tokens.verify_access(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::warn!("Authentication failed for {} {}: {}", req.method(), req.path(), e);
                    return Err(unauthorized(&e.to_string()));
                }
            };

            log::debug!("Authenticated user {} on {}", claims.sub, req.path());
            req.extensions_mut().insert(AuthContext { claims });

            service.call(req).await
        })
    }
}

/// 401 carrying the JSON error body
fn unauthorized(message: &str) -> Error {
    let response = error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED_CODE, message);
    InternalError::from_response(message.to_string(), response).into()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
