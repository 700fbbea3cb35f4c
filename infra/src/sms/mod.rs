//! SMS Service Module
//!
//! Sends one-time codes through Twilio's REST API, or records them in
//! memory when the mock provider is configured.

pub mod twilio;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use hh_core::services::verification::{MockSmsService, SmsServiceTrait};
use hh_shared::config::SmsConfig;

use crate::InfrastructureError;

pub use twilio::TwilioSmsService;

/// Build the SMS service named by `config.provider`
///
/// Unknown providers fall back to the mock so development setups keep working.
pub fn create_sms_service(
    config: &SmsConfig,
) -> Result<Arc<dyn SmsServiceTrait>, InfrastructureError> {
    match config.provider.as_str() {
        "twilio" => Ok(Arc::new(TwilioSmsService::new(config.clone())?)),
        "mock" => Ok(Arc::new(MockSmsService::new())),
        other => {
            tracing::warn!("Unknown SMS provider '{}', using mock implementation", other);
            Ok(Arc::new(MockSmsService::new()))
        }
    }
}
