//! SMTP delivery through lettre's async transport

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use hh_core::services::account::EmailServiceTrait;
use hh_shared::config::EmailConfig;

use crate::InfrastructureError;

pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    /// STARTTLS relay; credentials are only sent when a username is configured
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from = parse_mailbox(&config.from_address)?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP host: {}", e)))?
            .port(config.smtp_port);
        if !config.smtp_username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ));
        }

        tracing::info!(host = %config.smtp_host, port = config.smtp_port, "SMTP email service initialized");

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, InfrastructureError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| InfrastructureError::Email(format!("Invalid address '{}': {}", address, e)))
}

/// Assemble an HTML message
pub(crate) fn build_message(
    from: &Mailbox,
    to: &str,
    subject: &str,
    html_body: &str,
) -> Result<Message, InfrastructureError> {
    Message::builder()
        .from(from.clone())
        .to(parse_mailbox(to)?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html_body.to_string())
        .map_err(|e| InfrastructureError::Email(e.to_string()))
}

#[async_trait]
impl EmailServiceTrait for SmtpEmailService {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        let message = build_message(&self.from, to, subject, html_body).map_err(|e| e.to_string())?;

        match self.transport.send(message).await {
            Ok(response) => {
                let reply = response.message().collect::<Vec<_>>().join(" ");
                tracing::info!(subject = subject, event = "email_sent", "Email handed to SMTP relay");
                Ok(reply)
            }
            Err(e) => {
                tracing::error!(error = %e, event = "email_failed", "SMTP delivery failed");
                Err(format!("Email service error: {}", e))
            }
        }
    }
}
