//! Mapping from domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use std::collections::HashMap;
use validator::ValidationErrors;

use hh_core::errors::{AuthError, DomainError, TokenError};
use hh_shared::errors::{error_codes, ErrorResponse};

/// HTTP status for a domain error
///
/// Credential failures answer 400 rather than 401; clients of the account
/// endpoints rely on that.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Internal { .. } | DomainError::Database { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidUserEmail => StatusCode::NOT_ACCEPTABLE,
            AuthError::AccountNotFound => StatusCode::NOT_FOUND,
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AuthError::AuthenticationFailed
            | AuthError::WrongRole { .. }
            | AuthError::IncorrectPassword
            | AuthError::PasswordMismatch
            | AuthError::WeakPassword { .. } => StatusCode::BAD_REQUEST,
        },
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::BAD_REQUEST,
    }
}

fn error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
            error_codes::VALIDATION_ERROR
        }
        DomainError::NotFound { .. } => error_codes::NOT_FOUND,
        DomainError::Unauthorized => error_codes::UNAUTHORIZED,
        DomainError::Forbidden { .. } => error_codes::FORBIDDEN,
        DomainError::Conflict { .. } => error_codes::CONFLICT,
        DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        DomainError::Database { .. } => error_codes::DATABASE_ERROR,
        DomainError::Auth(auth) => auth.error_code(),
        DomainError::Token(token) => token.error_code(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
        // Internal details stay in the log
        return HttpResponse::build(status).json(ErrorResponse::new(
            error_code(&error),
            "An internal error occurred",
        ));
    }
    log::warn!("Request failed: {}", error);

    let mut response = ErrorResponse::new(error_code(&error), error.to_string());
    if let DomainError::ValidationErr(validation) = &error {
        response = response.add_detail("field", validation.field());
    }
    HttpResponse::build(status).json(response)
}

/// 400 with the failing fields of a request body
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    log::warn!("Validation failed: {:?}", field_errors);

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", field_errors),
    )
}
