//! Twilio client tests against a local stub server

use hh_core::services::verification::SmsServiceTrait;
use hh_shared::config::SmsConfig;
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::sms::{create_sms_service, TwilioSmsService};
use crate::InfrastructureError;

fn config() -> SmsConfig {
    SmsConfig {
        provider: "twilio".to_string(),
        account_sid: "ACtest".to_string(),
        auth_token: "secret".to_string(),
        from_number: "+15005550006".to_string(),
        request_timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_send_returns_message_sid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/ACtest/Messages.json"))
        .and(basic_auth("ACtest", "secret"))
        .and(body_string_contains("Body=Your+code+is+123456"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "SM123",
            "status": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = TwilioSmsService::with_base_url(config(), server.uri()).unwrap();
    let sid = service
        .send_sms("+15551234567", "Your code is 123456")
        .await
        .unwrap();
    assert_eq!(sid, "SM123");
}

#[tokio::test]
async fn test_provider_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 21211,
            "message": "The 'To' number is not a valid phone number."
        })))
        .mount(&server)
        .await;

    let service = TwilioSmsService::with_base_url(config(), server.uri()).unwrap();
    let err = service.send_sms("not-a-number", "hi").await.unwrap_err();
    assert!(err.contains("21211"));
}

#[test]
fn test_config_validation() {
    let missing_sid = SmsConfig {
        account_sid: String::new(),
        ..config()
    };
    assert!(matches!(
        TwilioSmsService::new(missing_sid),
        Err(InfrastructureError::Config(_))
    ));

    let bad_from = SmsConfig {
        from_number: "15005550006".to_string(),
        ..config()
    };
    assert!(matches!(
        TwilioSmsService::new(bad_from),
        Err(InfrastructureError::Config(_))
    ));
}

#[tokio::test]
async fn test_unknown_provider_falls_back_to_mock() {
    let service = create_sms_service(&SmsConfig {
        provider: "carrier-pigeon".to_string(),
        ..SmsConfig::default()
    })
    .unwrap();
    assert!(service.send_sms("+15551234567", "hello").await.is_ok());
}
