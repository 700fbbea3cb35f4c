//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! decodes it as an access token with the `TokenService` held in `AppState`,
//! and injects an [`AuthContext`] into the request.
//!
//! A missing header is always 401. How a present but unusable token is
//! answered depends on the [`Rejection`] the middleware was built with.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use hh_core::domain::entities::{Claims, Role, TokenUse};
use hh_core::errors::TokenError;
use hh_core::services::VerificationOutcome;
use hh_shared::errors::{error_codes, ErrorResponse};
use hh_shared::types::StatusMessage;

use crate::state::AppState;

/// Authenticated caller, taken from access token claims
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
    pub role: Option<Role>,
    pub email: Option<String>,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Result<Self, TokenError> {
        let account_id = claims.account_id().map_err(|_| TokenError::TokenMalformed)?;
        Ok(Self {
            account_id,
            role: claims.role,
            email: claims.email,
        })
    }
}

/// Response style for an expired or undecodable bearer token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rejection {
    /// 401 `ErrorResponse` with `token_expired` or `token_malformed`
    #[default]
    Unauthorized,
    /// 400 `{ status, message }` with "Verification link expired" or "Invalid token"
    VerificationOutcome,
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth {
    rejection: Rejection,
}

impl JwtAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// For the phone verification routes, which report token failures
    /// alongside their other outcomes
    pub fn verification_flow() -> Self {
        Self {
            rejection: Rejection::VerificationOutcome,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            rejection: self.rejection,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    rejection: Rejection,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
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
        let rejection = self.rejection;

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(reject(
                        req,
                        error_codes::UNAUTHORIZED,
                        "Authentication credentials were not provided",
                    ))
                }
            };

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                log::error!("JwtAuth mounted without AppState");
                return Ok(reject(req, error_codes::UNAUTHORIZED, "JWT verification not configured"));
            };

            match state
                .tokens
                .decode(&token, TokenUse::Access)
                .and_then(AuthContext::from_claims)
            {
                Ok(auth_context) => {
                    req.extensions_mut().insert(auth_context);
                }
                Err(e) => {
                    log::debug!("Rejected access token: {}", e);
                    let response = token_rejection(rejection, e);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn token_rejection(rejection: Rejection, error: TokenError) -> HttpResponse {
    match rejection {
        Rejection::Unauthorized => {
            let (code, message) = match error {
                TokenError::TokenExpired => (error_codes::TOKEN_EXPIRED, "Token has expired"),
                _ => (error_codes::TOKEN_MALFORMED, "Token is invalid"),
            };
            HttpResponse::Unauthorized().json(ErrorResponse::new(code, message))
        }
        Rejection::VerificationOutcome => {
            let outcome = VerificationOutcome::from(error);
            HttpResponse::BadRequest()
                .json(StatusMessage::new(outcome.status_code(), outcome.message()))
        }
    }
}

/// Answer 401 without reaching the wrapped service
fn reject<B>(req: ServiceRequest, code: &str, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(code, message));
    req.into_response(response).map_into_right_body()
}

fn unauthorized(code: &str, message: &str) -> Error {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(code, message));
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
            .ok_or_else(|| unauthorized(error_codes::UNAUTHORIZED, "Authentication required"));

        ready(result)
    }
}
