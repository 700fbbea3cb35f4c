//! Email service that records messages instead of sending them

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::EmailServiceTrait;

/// A recorded email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records every email and logs it; optionally fails every send
#[derive(Clone, Default)]
pub struct MockEmailService {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    should_fail: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// All emails sent so far, oldest first
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Most recent email to an address
    pub fn last_to(&self, to: &str) -> Option<SentEmail> {
        self.sent().into_iter().rev().find(|e| e.to == to)
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("Email service error".to_string());
        }

        tracing::info!(to = to, subject = subject, event = "mock_email_sent", "Mock email delivered");

        self.sent.lock().map_err(|e| e.to_string())?.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(format!("mock-email-{}", uuid::Uuid::new_v4()))
    }
}
