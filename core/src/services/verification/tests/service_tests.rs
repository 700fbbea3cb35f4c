//! Unit tests for the phone verification flow

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::pending_verification::{PendingVerification, CODE_LENGTH};
use crate::errors::{DomainError, TokenError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::verification::{MockSmsService, SessionStore, VerificationOutcome};

use super::mocks::{account_with_phone, fixture, fixture_with_sms, SESSION};

#[tokio::test]
async fn test_first_request_issues_and_sends_one_code() {
    let f = fixture().await;

    let outcome = f
        .service
        .confirm_current_number(SESSION, f.account.id, None)
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Sent);

    let pending = f.sessions.get(SESSION).await.unwrap().expect("code pending");
    assert_eq!(pending.target, "0901-000-0001");
    assert_eq!(pending.code.len(), CODE_LENGTH);

    // the code went out by SMS to the account's number
    assert_eq!(f.sms.sent_count("0901-000-0001"), 1);
    assert_eq!(f.sms.last_message("0901-000-0001"), Some(pending.code));
    assert_eq!(f.sessions.len().await, 1);
}

#[tokio::test]
async fn test_already_verified_never_issues_a_code() {
    let f = fixture().await;
    let mut account = f.account.clone();
    account.verify_phone();
    f.accounts.update(account).await.unwrap();

    for otp in [None, Some("123456")] {
        let outcome = f
            .service
            .confirm_current_number(SESSION, f.account.id, otp)
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::AlreadyVerified);
        assert_eq!(outcome.message(), "Phone number already validated");
    }

    assert!(f.sessions.is_empty().await);
    assert_eq!(f.sms.sent_count("0901-000-0001"), 0);
}

#[tokio::test]
async fn test_correct_code_verifies_once_and_clears() {
    let f = fixture().await;
    f.service
        .confirm_current_number(SESSION, f.account.id, None)
        .await
        .unwrap();
    let code = f.sessions.get(SESSION).await.unwrap().unwrap().code;

    let outcome = f
        .service
        .confirm_current_number(SESSION, f.account.id, Some(&code))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Success);
    assert_eq!(outcome.message(), "OTP Code Verified");

    let account = f.accounts.find_by_id(f.account.id).await.unwrap().unwrap();
    assert!(account.phone_verified);
    assert!(f.sessions.get(SESSION).await.unwrap().is_none());

    // replaying the same code hits the already-verified precondition
    let replay = f
        .service
        .confirm_current_number(SESSION, f.account.id, Some(&code))
        .await
        .unwrap();
    assert_eq!(replay, VerificationOutcome::AlreadyVerified);
}

#[tokio::test]
async fn test_wrong_code_clears_without_verifying() {
    let f = fixture().await;
    f.sessions
        .set(
            SESSION,
            PendingVerification {
                target: "0901-000-0001".to_string(),
                code: "123456".to_string(),
                issued_at: Utc::now(),
            },
        )
        .await
        .unwrap();

    let outcome = f
        .service
        .confirm_current_number(SESSION, f.account.id, Some("000000"))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Incorrect);
    assert_eq!(outcome.message(), "OTP Incorrect!");

    assert!(f.sessions.get(SESSION).await.unwrap().is_none());
    let account = f.accounts.find_by_id(f.account.id).await.unwrap().unwrap();
    assert_eq!(account, f.account);
}

#[tokio::test]
async fn test_missing_code_after_issue_is_invalid_and_clears() {
    let f = fixture().await;
    f.service
        .confirm_current_number(SESSION, f.account.id, None)
        .await
        .unwrap();
    let original = f.sessions.get(SESSION).await.unwrap().unwrap().code;

    let outcome = f
        .service
        .confirm_current_number(SESSION, f.account.id, None)
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Invalid);
    assert_eq!(outcome.message(), "Invalid OTP!");
    assert!(f.sessions.get(SESSION).await.unwrap().is_none());

    // the original code no longer verifies: the session starts over and a new code is sent
    let later = f
        .service
        .confirm_current_number(SESSION, f.account.id, Some(&original))
        .await
        .unwrap();
    assert_eq!(later, VerificationOutcome::Sent);
    let account = f.accounts.find_by_id(f.account.id).await.unwrap().unwrap();
    assert!(!account.phone_verified);
    assert_eq!(f.sms.sent_count("0901-000-0001"), 2);
}

#[tokio::test]
async fn test_empty_code_counts_as_missing() {
    let f = fixture().await;
    f.service
        .confirm_current_number(SESSION, f.account.id, None)
        .await
        .unwrap();

    let outcome = f
        .service
        .confirm_current_number(SESSION, f.account.id, Some(""))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Invalid);
}

#[tokio::test]
async fn test_send_failure_reports_error_and_leaves_no_code() {
    let f = fixture_with_sms(MockSmsService::failing()).await;

    let outcome = f
        .service
        .confirm_current_number(SESSION, f.account.id, None)
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::SendError);
    assert_eq!(outcome.message(), "Sending OTP Error");
    assert!(f.sessions.get(SESSION).await.unwrap().is_none());
}

#[tokio::test]
async fn test_change_number_round_trip() {
    let f = fixture().await;
    let mut account = f.account.clone();
    account.phone_number = "0901-000-0009".to_string();
    f.accounts.update(account).await.unwrap();

    let outcome = f
        .service
        .change_number(SESSION, f.account.id, "0901-000-0001", None)
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Sent);
    let code = f.sessions.get(SESSION).await.unwrap().unwrap().code;
    assert_eq!(f.sms.last_message("0901-000-0001"), Some(code.clone()));

    let outcome = f
        .service
        .change_number(SESSION, f.account.id, "0901-000-0001", Some(&code))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Success);

    let account = f.accounts.find_by_id(f.account.id).await.unwrap().unwrap();
    assert!(account.phone_verified);
    assert_eq!(account.phone_number, "0901-000-0001");
    assert!(f.sessions.get(SESSION).await.unwrap().is_none());
}

#[tokio::test]
async fn test_change_to_taken_number_leaves_session_untouched() {
    let f = fixture().await;
    f.accounts
        .create(account_with_phone("other@example.com", "0903-000-0003"))
        .await
        .unwrap();

    let pending = PendingVerification {
        target: "0904-000-0004".to_string(),
        code: "654321".to_string(),
        issued_at: Utc::now(),
    };
    f.sessions.set(SESSION, pending.clone()).await.unwrap();

    let outcome = f
        .service
        .change_number(SESSION, f.account.id, " 0903-000-0003 ", Some("654321"))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::AlreadyExists);
    assert_eq!(outcome.message(), "Phone number already Exist");

    // rejected before the session was read or cleared
    assert_eq!(f.sessions.get(SESSION).await.unwrap(), Some(pending));
    assert_eq!(f.sms.sent_count("0903-000-0003"), 0);
}

#[tokio::test]
async fn test_change_to_invalid_number_is_rejected_before_the_session() {
    let f = fixture().await;
    let pending = PendingVerification {
        target: "0904-000-0004".to_string(),
        code: "654321".to_string(),
        issued_at: Utc::now(),
    };
    f.sessions.set(SESSION, pending.clone()).await.unwrap();

    for number in ["", "   ", "not-a-phone", "12"] {
        let result = f
            .service
            .change_number(SESSION, f.account.id, number, Some("654321"))
            .await;
        assert!(
            matches!(
                result,
                Err(DomainError::ValidationErr(ValidationError::InvalidFormat { ref field })) if field == "number"
            ),
            "number {:?} gave {:?}",
            number,
            result
        );
    }

    assert_eq!(f.sessions.get(SESSION).await.unwrap(), Some(pending));
    assert_eq!(f.sms.sent_count(""), 0);
    assert_eq!(f.sms.sent_count("not-a-phone"), 0);

    let account = f.accounts.find_by_id(f.account.id).await.unwrap().unwrap();
    assert_eq!(account.phone_number, "0901-000-0001");
    assert!(!account.phone_verified);
}

#[tokio::test]
async fn test_code_only_proves_the_number_it_was_sent_to() {
    let f = fixture().await;
    f.service
        .change_number(SESSION, f.account.id, "0905-000-0005", None)
        .await
        .unwrap();
    let code = f.sessions.get(SESSION).await.unwrap().unwrap().code;

    let outcome = f
        .service
        .change_number(SESSION, f.account.id, "0906-000-0006", Some(&code))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Incorrect);

    let account = f.accounts.find_by_id(f.account.id).await.unwrap().unwrap();
    assert_eq!(account.phone_number, "0901-000-0001");
    assert!(!account.phone_verified);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let f = fixture().await;
    f.service
        .confirm_current_number("session-a", f.account.id, None)
        .await
        .unwrap();

    let outcome = f
        .service
        .confirm_current_number("session-b", f.account.id, Some("123456"))
        .await
        .unwrap();
    assert_eq!(outcome, VerificationOutcome::Sent);
    assert_eq!(f.sessions.len().await, 2);
}

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let f = fixture().await;
    let result = f
        .service
        .confirm_current_number(SESSION, Uuid::new_v4(), None)
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[test]
fn test_outcome_status_mapping() {
    use VerificationOutcome::*;

    assert_eq!(Sent.status_code(), 200);
    assert_eq!(Success.status_code(), 200);
    assert_eq!(AlreadyVerified.status_code(), 403);
    assert_eq!(AlreadyExists.status_code(), 403);
    for outcome in [SendError, Invalid, Incorrect, TokenExpired, TokenMalformed] {
        assert_eq!(outcome.status_code(), 400);
        assert!(!outcome.is_success());
    }
}

#[test]
fn test_token_errors_map_to_distinct_outcomes() {
    assert_eq!(
        VerificationOutcome::from(TokenError::TokenExpired),
        VerificationOutcome::TokenExpired
    );
    assert_eq!(
        VerificationOutcome::from(TokenError::TokenMalformed),
        VerificationOutcome::TokenMalformed
    );
    assert_eq!(
        VerificationOutcome::from(TokenError::WrongTokenUse),
        VerificationOutcome::TokenMalformed
    );
    assert_eq!(VerificationOutcome::TokenExpired.message(), "Verification link expired");
    assert_eq!(VerificationOutcome::TokenMalformed.message(), "Invalid token");
}
