use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use hh_core::errors::AuthError;

use crate::dto::account::{RegisterRequest, UpdateAccountRequest};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::state::AppState;

use super::AccountKind;

/// Handler for POST /api/v1/customers and /api/v1/service-providers
///
/// Creates the account and mails an email verification link.
///
/// ## Success (201 Created)
/// The account (without its password hash) plus `verification_link`.
///
/// ## Errors
/// - 400 Bad Request: Invalid fields or weak password
/// - 409 Conflict: Email or phone number already registered
pub async fn register<K: AccountKind>(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.accounts.register(request.into(), K::ROLE).await {
        Ok(registration) => HttpResponse::Created().json(registration),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/customers and /api/v1/service-providers
pub async fn list_accounts<K: AccountKind>(state: web::Data<AppState>) -> HttpResponse {
    match state.accounts.list_by_role(K::ROLE).await {
        Ok(accounts) => HttpResponse::Ok().json(accounts),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/{kind}/{id}
///
/// An account of the other kind answers 404 like an unknown id.
pub async fn get_account<K: AccountKind>(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.accounts.get(path.into_inner()).await {
        Ok(account) if account.role == K::ROLE => HttpResponse::Ok().json(account),
        Ok(_) => handle_domain_error(AuthError::AccountNotFound.into()),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/{kind}/{id}; owner only
pub async fn update_account<K: AccountKind>(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateAccountRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .accounts
        .update_profile(auth.account_id, path.into_inner(), request.into())
        .await
    {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/{kind}/{id}; owner only
pub async fn delete_account<K: AccountKind>(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.accounts.delete(auth.account_id, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
