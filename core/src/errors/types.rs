//! Error types for authentication, tokens and input validation.
//!
//! Display strings are the messages returned to clients.

use thiserror::Error;

use crate::domain::entities::account::Role;

/// Authentication and account-credential errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    AuthenticationFailed,

    #[error("{}", wrong_role_message(.expected))]
    WrongRole { expected: Role },

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("{message}")]
    WeakPassword { message: String },

    #[error("Invalid user email")]
    InvalidUserEmail,

    #[error("Invalid User ID")]
    AccountNotFound,

    #[error("You do not have permission to perform this action")]
    InsufficientPermissions,
}

impl AuthError {
    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::AuthenticationFailed => "AUTHENTICATION_FAILED",
            AuthError::WrongRole { .. } => "WRONG_ROLE",
            AuthError::IncorrectPassword => "INCORRECT_PASSWORD",
            AuthError::PasswordMismatch => "PASSWORD_MISMATCH",
            AuthError::WeakPassword { .. } => "WEAK_PASSWORD",
            AuthError::InvalidUserEmail => "INVALID_USER_EMAIL",
            AuthError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            AuthError::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
        }
    }
}

fn wrong_role_message(expected: &Role) -> &'static str {
    match expected {
        Role::Customer => "You're not a customer. Try the logging in as a service provider",
        Role::ServiceProvider => "You're not a service_provider. Try the logging in as a customer",
    }
}

/// Token decode and issue errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Signature valid but `exp` has passed
    #[error("Verification link expired")]
    TokenExpired,

    /// Anything else that stops a token from decoding
    #[error("Invalid token")]
    TokenMalformed,

    /// Token decoded but carries a different `token_use`
    #[error("Token cannot be used for this purpose")]
    WrongTokenUse,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => "token_expired",
            TokenError::TokenMalformed => "token_malformed",
            TokenError::WrongTokenUse => "wrong_token_use",
            TokenError::TokenGenerationFailed => "token_generation_failed",
        }
    }
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("Field {field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Duplicate value for field: {field}")]
    DuplicateValue { field: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::DuplicateValue { field } => field,
        }
    }
}
