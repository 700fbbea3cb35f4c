//! SMS service that records messages instead of sending them

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hh_shared::utils::phone::mask_phone_number;

use super::traits::SmsServiceTrait;

/// Records every message by recipient and logs it.
///
/// Used for local development and tests. Can be switched into a failing
/// mode to exercise dispatch errors.
#[derive(Clone, Default)]
pub struct MockSmsService {
    sent: Arc<Mutex<HashMap<String, Vec<String>>>>,
    should_fail: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every send fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Most recent message sent to a number
    pub fn last_message(&self, phone: &str) -> Option<String> {
        self.sent
            .lock()
            .ok()
            .and_then(|sent| sent.get(phone).and_then(|msgs| msgs.last().cloned()))
    }

    /// Number of messages sent to a number
    pub fn sent_count(&self, phone: &str) -> usize {
        self.sent
            .lock()
            .map(|sent| sent.get(phone).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("SMS service error".to_string());
        }

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "mock_sms_sent",
            body = message,
            "Mock SMS delivered"
        );

        let mut sent = self.sent.lock().map_err(|e| e.to_string())?;
        sent.entry(phone.to_string())
            .or_default()
            .push(message.to_string());
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}
