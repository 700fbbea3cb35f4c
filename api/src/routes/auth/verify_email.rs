use actix_web::{web, HttpResponse};
use serde_json::json;

use hh_core::errors::{DomainError, TokenError};

use crate::dto::auth::{VerifyEmailQuery, VerifyEmailResponse};
use crate::handlers::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /api/v1/auth/verify-email?token=...
///
/// ## Success (200 OK)
/// ```json
/// { "email": "user email verified successfully" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `{ "error": "Verification link expired" }` or `{ "error": "Invalid token" }`
/// - 404 Not Found: The account in the token no longer exists
pub async fn verify_email(
    state: web::Data<AppState>,
    query: web::Query<VerifyEmailQuery>,
) -> HttpResponse {
    let token = query.token.as_deref().unwrap_or_default();

    match state.accounts.verify_email(token).await {
        Ok(_) => HttpResponse::Ok().json(VerifyEmailResponse {
            email: "user email verified successfully".to_string(),
        }),
        Err(DomainError::Token(e)) => token_error(e),
        Err(error) => handle_domain_error(error),
    }
}

fn token_error(error: TokenError) -> HttpResponse {
    // Any decode failure other than expiry reads as an invalid token
    let error = match error {
        TokenError::TokenExpired => TokenError::TokenExpired,
        _ => TokenError::TokenMalformed,
    };
    HttpResponse::BadRequest().json(json!({ "error": error.to_string() }))
}
