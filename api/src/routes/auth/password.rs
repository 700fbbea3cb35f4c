use actix_web::{web, HttpResponse};

use hh_core::services::PasswordChange;
use hh_shared::types::ApiResponse;

use crate::dto::auth::{
    ChangePasswordQuery, ChangePasswordRequest, ResetEmailRequest, ResetEmailResponse,
    ResetPasswordRequest,
};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for PUT /api/v1/auth/change-password?user_id=...
///
/// # Request Body
///
/// ```json
/// { "old_password": "...", "password": "...", "password2": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Wrong old password, weak or mismatched new password
/// - 403 Forbidden: `user_id` is not the caller's account
pub async fn change_password(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<ChangePasswordQuery>,
    request: web::Json<ChangePasswordRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let change = PasswordChange {
        old_password: request.old_password,
        password: request.password,
        password_confirmation: request.password2,
    };

    match state
        .accounts
        .change_password(auth.account_id, query.user_id, change)
        .await
    {
        Ok(()) => HttpResponse::Accepted().json(ApiResponse::message("Password changed successfully")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/reset-password-email
///
/// ## Errors
/// - 406 Not Acceptable: No account with that email
pub async fn request_reset_email(
    state: web::Data<AppState>,
    request: web::Json<ResetEmailRequest>,
) -> HttpResponse {
    match state.accounts.request_password_reset(&request.email).await {
        Ok(link) => HttpResponse::Ok().json(ResetEmailResponse {
            message: "Password Reset email sent".to_string(),
            link,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/reset-password
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    match state
        .accounts
        .reset_password(&request.email, &request.password, &request.password2)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Password reset successful")),
        Err(error) => handle_domain_error(error),
    }
}
