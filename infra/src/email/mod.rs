//! Email Service Module
//!
//! Delivers verification and password reset links over SMTP, or records
//! them in memory when the mock provider is configured.

pub mod smtp;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use hh_core::services::account::{EmailServiceTrait, MockEmailService};
use hh_shared::config::EmailConfig;

use crate::InfrastructureError;

pub use smtp::SmtpEmailService;

/// Build the email service named by `config.provider`
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailServiceTrait>, InfrastructureError> {
    match config.provider.as_str() {
        "smtp" => Ok(Arc::new(SmtpEmailService::new(config)?)),
        "mock" => Ok(Arc::new(MockEmailService::new())),
        other => {
            tracing::warn!("Unknown email provider '{}', using mock implementation", other);
            Ok(Arc::new(MockEmailService::new()))
        }
    }
}
