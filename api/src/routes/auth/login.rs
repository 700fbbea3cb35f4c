use actix_web::{web, HttpResponse};

use hh_core::domain::entities::Role;
use hh_core::errors::DomainError;
use hh_shared::errors::{error_codes, ErrorResponse};
use hh_shared::types::ApiResponse;

use crate::dto::auth::{LoginRequest, RefreshRequest, RefreshResponse};
use crate::handlers::handle_domain_error;
use crate::state::AppState;

const MISSING_CREDENTIALS: &str = "Please enter your email address and password.";

/// Handler for POST /api/v1/auth/customer-login
///
/// # Request Body
///
/// ```json
/// { "email": "jane@example.com", "password": "Secret123" }
/// ```
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Login successful",
///     "data": { "access": "eyJ...", "refresh": "eyJ...", "access_expires_in": 900, "refresh_expires_in": 604800 }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing credentials, wrong credentials or wrong role
pub async fn customer_login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    login(state, request.into_inner(), Role::Customer).await
}

/// Handler for POST /api/v1/auth/service-provider-login
pub async fn service_provider_login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    login(state, request.into_inner(), Role::ServiceProvider).await
}

async fn login(state: web::Data<AppState>, request: LoginRequest, role: Role) -> HttpResponse {
    let Some((email, password)) = request.credentials() else {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::BAD_REQUEST, MISSING_CREDENTIALS));
    };

    match state.accounts.login(email, password, role).await {
        Ok(tokens) => HttpResponse::Ok().json(ApiResponse::success("Login successful", tokens)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/refresh
///
/// # Request Body
///
/// ```json
/// { "refresh": "eyJ..." }
/// ```
///
/// ## Success (200 OK)
/// ```json
/// { "access": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: No refresh token in the body
/// - 401 Unauthorized: Refresh token invalid, expired or for a deleted account
pub async fn refresh(
    state: web::Data<AppState>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse {
    let Some(refresh_token) = request.refresh.as_deref().filter(|t| !t.is_empty()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::BAD_REQUEST,
            "Refresh token not provided",
        ));
    };

    match state.accounts.refresh(refresh_token).await {
        Ok(access) => HttpResponse::Ok().json(RefreshResponse { access }),
        Err(DomainError::Token(e)) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(e.error_code(), e.to_string()))
        }
        Err(error) => handle_domain_error(error),
    }
}
