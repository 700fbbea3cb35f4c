use hh_core::services::account::EmailServiceTrait;
use hh_shared::config::EmailConfig;
use lettre::message::Mailbox;

use crate::email::smtp::build_message;
use crate::email::{create_email_service, SmtpEmailService};
use crate::InfrastructureError;

fn sender() -> Mailbox {
    "HireHub <no-reply@hirehub.test>".parse().unwrap()
}

#[test]
fn test_build_message_sets_headers() {
    let message = build_message(
        &sender(),
        "jane@example.com",
        "Verify your email",
        "<a href=\"https://hirehub.test\">verify</a>",
    )
    .unwrap();

    let raw = String::from_utf8(message.formatted()).unwrap();
    assert!(raw.contains("Subject: Verify your email"));
    assert!(raw.contains("To: jane@example.com"));
    assert!(raw.contains("Content-Type: text/html"));
}

#[test]
fn test_build_message_rejects_bad_recipient() {
    let result = build_message(&sender(), "not an address", "Hi", "body");
    assert!(matches!(result, Err(InfrastructureError::Email(_))));
}

#[test]
fn test_smtp_service_rejects_bad_sender() {
    let config = EmailConfig {
        provider: "smtp".to_string(),
        from_address: "nobody".to_string(),
        ..EmailConfig::default()
    };
    assert!(SmtpEmailService::new(&config).is_err());
}

#[tokio::test]
async fn test_mock_provider_records_email() {
    let service = create_email_service(&EmailConfig::default()).unwrap();
    let id = service
        .send_email("jane@example.com", "Hello", "<p>hi</p>")
        .await
        .unwrap();
    assert!(id.starts_with("mock-email-"));
}
