//! Twilio SMS Service Implementation
//!
//! Talks to the Programmable Messaging REST API directly with reqwest.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use hh_core::services::verification::SmsServiceTrait;
use hh_shared::config::SmsConfig;
use hh_shared::utils::phone::mask_phone_number;

use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Twilio's limit on a single message body
const MAX_BODY_LEN: usize = 1600;

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<i64>,
    message: String,
}

pub struct TwilioSmsService {
    http: reqwest::Client,
    config: SmsConfig,
    base_url: String,
}

impl TwilioSmsService {
    pub fn new(config: SmsConfig) -> Result<Self, InfrastructureError> {
        Self::with_base_url(config, TWILIO_API_BASE)
    }

    /// Point the client at another host, used against a stub server in tests
    pub fn with_base_url(
        config: SmsConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN must be set".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self {
            http,
            config,
            base_url: base_url.into(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    async fn send(&self, to: &str, body: &str) -> Result<String, InfrastructureError> {
        if body.len() > MAX_BODY_LEN {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_BODY_LEN
            )));
        }

        let response = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", to),
                ("From", self.config.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let message: MessageResponse = response.json().await?;
            return Ok(message.sid);
        }

        let detail = match response.json::<ErrorResponse>().await {
            Ok(err) => match err.code {
                Some(code) => format!("{} (code {})", err.message, code),
                None => err.message,
            },
            Err(_) => status.to_string(),
        };
        Err(InfrastructureError::Sms(format!(
            "Twilio rejected message ({}): {}",
            status.as_u16(),
            detail
        )))
    }
}

#[async_trait]
impl SmsServiceTrait for TwilioSmsService {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        match self.send(phone, message).await {
            Ok(sid) => {
                info!(
                    phone = %mask_phone_number(phone),
                    sid = %sid,
                    event = "sms_sent",
                    "SMS sent via Twilio"
                );
                Ok(sid)
            }
            Err(e) => {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "sms_failed",
                    "Failed to send SMS via Twilio"
                );
                Err(e.to_string())
            }
        }
    }
}
