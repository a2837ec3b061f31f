//! Session authentication middleware for protecting admin endpoints.
//!
//! Extracts the Bearer token from the Authorization header, verifies it
//! with the core `TokenService`, and injects a `SessionContext` into the
//! request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use chrono::{DateTime, Utc};
use cs2dle_core::{
    domain::entities::session::{SessionClaims, SessionIdentity},
    errors::TokenError,
    services::token::TokenService,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::unauthorized;

/// Authenticated admin session injected into requests
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Identity carried by the token
    pub identity: SessionIdentity,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl SessionContext {
    /// Creates a session context from verified claims
    pub fn from_claims(claims: SessionClaims) -> Result<Self, TokenError> {
        let identity = claims.identity().map_err(|_| TokenError::Invalid)?;
        Ok(Self {
            identity,
            expires_at: claims.expires_at(),
        })
    }
}

/// Session authentication middleware factory
#[derive(Clone)]
pub struct SessionAuth {
    token_service: Arc<TokenService>,
}

impl SessionAuth {
    /// Creates a new session authentication middleware
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let context = match authenticate(&req, &token_service) {
                Ok(context) => context,
                Err(e) => {
                    tracing::debug!(error = %e, path = req.path(), "Session rejected");
                    return Ok(req.into_response(unauthorized(&e)).map_into_right_body());
                }
            };

            req.extensions_mut().insert(context);

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<SessionContext, TokenError> {
    let token = extract_bearer_token(req).ok_or(TokenError::Missing)?;

    let claims = token_service.verify(&token).map_err(|e| match e {
        cs2dle_core::errors::DomainError::Token(token_error) => token_error,
        _ => TokenError::Invalid,
    })?;

    SessionContext::from_claims(claims)
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
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| {
                let error = TokenError::Missing;
                InternalError::from_response(error.clone(), unauthorized(&error)).into()
            });

        ready(result)
    }
}
