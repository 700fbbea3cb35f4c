//! Unit tests for domain error types

use crate::domain::entities::account::Role;
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_wrong_role_messages() {
    let error = AuthError::WrongRole {
        expected: Role::Customer,
    };
    assert_eq!(
        error.to_string(),
        "You're not a customer. Try the logging in as a service provider"
    );

    let error = AuthError::WrongRole {
        expected: Role::ServiceProvider,
    };
    assert_eq!(
        error.to_string(),
        "You're not a service_provider. Try the logging in as a customer"
    );
}

#[test]
fn test_token_error_messages_are_distinct() {
    assert_eq!(TokenError::TokenExpired.to_string(), "Verification link expired");
    assert_eq!(TokenError::TokenMalformed.to_string(), "Invalid token");
    assert_ne!(
        TokenError::TokenExpired.error_code(),
        TokenError::TokenMalformed.error_code()
    );
}

#[test]
fn test_domain_error_bridges() {
    let error: DomainError = TokenError::TokenExpired.into();
    assert!(matches!(error, DomainError::Token(TokenError::TokenExpired)));
    // transparent bridge keeps the inner message
    assert_eq!(error.to_string(), "Verification link expired");

    let error: DomainError = AuthError::PasswordMismatch.into();
    assert_eq!(error.to_string(), "passwords do not match");
}

#[test]
fn test_validation_error_field() {
    let error = ValidationError::OutOfRange {
        field: "rating".to_string(),
        min: 1,
        max: 5,
    };
    assert_eq!(error.field(), "rating");
    assert!(error.to_string().contains("min: 1, max: 5"));
}

#[test]
fn test_shorthand_constructors() {
    assert!(matches!(
        DomainError::not_found("Account"),
        DomainError::NotFound { resource } if resource == "Account"
    ));
    assert_eq!(DomainError::forbidden("nope").to_string(), "nope");
}
