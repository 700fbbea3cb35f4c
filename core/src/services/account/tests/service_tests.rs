//! Unit tests for the account service

use uuid::Uuid;

use crate::domain::entities::account::{AccountChanges, Role};
use crate::domain::entities::token::TokenUse;
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::account::{MockEmailService, PasswordChange};

use super::mocks::{fixture, fixture_with_email, new_account, registered, PASSWORD};

#[tokio::test]
async fn test_register_mails_verification_link() {
    let f = fixture();
    let registration = f
        .service
        .register(new_account("jane@example.com", "0901-000-0001"), Role::Customer)
        .await
        .unwrap();

    assert!(registration
        .verification_link
        .starts_with("https://hirehub.test/api/v1/auth/verify-email?token="));
    assert!(!registration.account.email_verified);
    assert_ne!(registration.account.password_hash, PASSWORD);

    let mail = f.email.last_to("jane@example.com").expect("email sent");
    assert_eq!(mail.subject, "Verify your email");
    assert!(mail.body.contains(&registration.verification_link));
}

#[tokio::test]
async fn test_register_survives_email_failure() {
    let f = fixture_with_email(MockEmailService::failing());
    let registration = f
        .service
        .register(new_account("jane@example.com", "0901-000-0001"), Role::Customer)
        .await
        .unwrap();

    assert!(!registration.verification_link.is_empty());
    assert!(f.accounts.find_by_id(registration.account.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let f = fixture();

    let mut weak = new_account("jane@example.com", "0901-000-0001");
    weak.password = "password".to_string();
    let result = f.service.register(weak, Role::Customer).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::WeakPassword { .. }))));

    let result = f
        .service
        .register(new_account("not-an-email", "0901-000-0001"), Role::Customer)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_duplicates() {
    let f = fixture();
    registered(&f, "jane@example.com", "0901-000-0001", Role::Customer).await;

    let dup_email = f
        .service
        .register(new_account("JANE@example.com", "0901-000-0002"), Role::ServiceProvider)
        .await;
    assert!(matches!(dup_email, Err(DomainError::Conflict { .. })));

    let dup_phone = f
        .service
        .register(new_account("john@example.com", "0901-000-0001"), Role::Customer)
        .await;
    assert!(matches!(dup_phone, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_list_by_role_empty_is_not_found() {
    let f = fixture();
    registered(&f, "jane@example.com", "0901-000-0001", Role::Customer).await;

    assert_eq!(f.service.list_by_role(Role::Customer).await.unwrap().len(), 1);
    assert!(matches!(
        f.service.list_by_role(Role::ServiceProvider).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_login_checks_password_and_role() {
    let f = fixture();
    let account = registered(&f, "pro@example.com", "0901-000-0001", Role::ServiceProvider).await;

    let pair = f
        .service
        .login("pro@example.com", PASSWORD, Role::ServiceProvider)
        .await
        .unwrap();
    let claims = f.tokens.decode(&pair.access, TokenUse::Access).unwrap();
    assert_eq!(claims.account_id().unwrap(), account.id);

    let wrong_role = f
        .service
        .login("pro@example.com", PASSWORD, Role::Customer)
        .await;
    match wrong_role {
        Err(DomainError::Auth(error @ AuthError::WrongRole { .. })) => assert_eq!(
            error.to_string(),
            "You're not a customer. Try the logging in as a service provider"
        ),
        other => panic!("expected wrong role, got {:?}", other),
    }

    let bad_password = f
        .service
        .login("pro@example.com", "Wrong1234", Role::ServiceProvider)
        .await;
    assert!(matches!(
        bad_password,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));

    let unknown = f
        .service
        .login("nobody@example.com", PASSWORD, Role::ServiceProvider)
        .await;
    assert!(matches!(unknown, Err(DomainError::Auth(AuthError::AuthenticationFailed))));
}

#[tokio::test]
async fn test_refresh_issues_access_token() {
    let f = fixture();
    let account = registered(&f, "jane@example.com", "0901-000-0001", Role::Customer).await;
    let pair = f
        .service
        .login("jane@example.com", PASSWORD, Role::Customer)
        .await
        .unwrap();

    let access = f.service.refresh(&pair.refresh).await.unwrap();
    let claims = f.tokens.decode(&access, TokenUse::Access).unwrap();
    assert_eq!(claims.account_id().unwrap(), account.id);

    // access tokens cannot be used to refresh
    assert!(matches!(
        f.service.refresh(&pair.access).await,
        Err(DomainError::Token(TokenError::WrongTokenUse))
    ));
}

#[tokio::test]
async fn test_verify_email_is_idempotent() {
    let f = fixture();
    let registration = f
        .service
        .register(new_account("jane@example.com", "0901-000-0001"), Role::Customer)
        .await
        .unwrap();
    let token = registration
        .verification_link
        .split("token=")
        .nth(1)
        .unwrap()
        .to_string();

    let account = f.service.verify_email(&token).await.unwrap();
    assert!(account.email_verified);
    let again = f.service.verify_email(&token).await.unwrap();
    assert!(again.email_verified);

    assert!(matches!(
        f.service.verify_email("garbage").await,
        Err(DomainError::Token(TokenError::TokenMalformed))
    ));
}

#[tokio::test]
async fn test_verify_email_for_deleted_account() {
    let f = fixture();
    let token = f
        .tokens
        .generate_email_verification_token(Uuid::new_v4())
        .unwrap();
    assert!(matches!(
        f.service.verify_email(&token).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_change_password_rules() {
    let f = fixture();
    let account = registered(&f, "jane@example.com", "0901-000-0001", Role::Customer).await;
    let change = |old: &str, new: &str, confirm: &str| PasswordChange {
        old_password: old.to_string(),
        password: new.to_string(),
        password_confirmation: confirm.to_string(),
    };

    let other = f
        .service
        .change_password(Uuid::new_v4(), account.id, change(PASSWORD, "NewSecret1", "NewSecret1"))
        .await;
    assert!(matches!(
        other,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    let wrong_old = f
        .service
        .change_password(account.id, account.id, change("Nope12345", "NewSecret1", "NewSecret1"))
        .await;
    assert!(matches!(wrong_old, Err(DomainError::Auth(AuthError::IncorrectPassword))));

    let weak = f
        .service
        .change_password(account.id, account.id, change(PASSWORD, "short", "short"))
        .await;
    assert!(matches!(weak, Err(DomainError::Auth(AuthError::WeakPassword { .. }))));

    let mismatch = f
        .service
        .change_password(account.id, account.id, change(PASSWORD, "NewSecret1", "NewSecret2"))
        .await;
    assert!(matches!(mismatch, Err(DomainError::Auth(AuthError::PasswordMismatch))));

    f.service
        .change_password(account.id, account.id, change(PASSWORD, "NewSecret1", "NewSecret1"))
        .await
        .unwrap();
    assert!(f
        .service
        .login("jane@example.com", "NewSecret1", Role::Customer)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_password_reset_flow() {
    let f = fixture();
    registered(&f, "jane@example.com", "0901-000-0001", Role::Customer).await;

    assert!(matches!(
        f.service.request_password_reset("nobody@example.com").await,
        Err(DomainError::Auth(AuthError::InvalidUserEmail))
    ));

    let link = f.service.request_password_reset("jane@example.com").await.unwrap();
    assert_eq!(link, "https://hirehub.test/api/v1/auth/reset-password");
    assert_eq!(
        f.email.last_to("jane@example.com").map(|m| m.subject),
        Some("Reset your password".to_string())
    );

    assert!(matches!(
        f.service.reset_password("jane@example.com", "Another1", "Another2").await,
        Err(DomainError::Auth(AuthError::PasswordMismatch))
    ));
    assert!(matches!(
        f.service.reset_password("nobody@example.com", "Another1", "Another1").await,
        Err(DomainError::Validation { .. })
    ));

    f.service
        .reset_password("jane@example.com", "Another1", "Another1")
        .await
        .unwrap();
    assert!(f
        .service
        .login("jane@example.com", "Another1", Role::Customer)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_profile_update_and_delete_by_owner_only() {
    let f = fixture();
    let account = registered(&f, "jane@example.com", "0901-000-0001", Role::Customer).await;
    let stranger = Uuid::new_v4();

    let changes = AccountChanges {
        location: Some("Abuja".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        f.service.update_profile(stranger, account.id, changes.clone()).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    let updated = f
        .service
        .update_profile(account.id, account.id, changes)
        .await
        .unwrap();
    assert_eq!(updated.location.as_deref(), Some("Abuja"));

    assert!(matches!(
        f.service.delete(stranger, account.id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    f.service.delete(account.id, account.id).await.unwrap();
    assert!(matches!(
        f.service.get(account.id).await,
        Err(DomainError::Auth(AuthError::AccountNotFound))
    ));
}
