//! Phone verification module
//!
//! This module gates phone number claims behind a one-time code:
//! - Code generation and SMS dispatch
//! - Session-scoped pending verification (one per session)
//! - Confirming the current number or switching to a new one

mod config;
mod service;
mod session;
mod sms;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::PhoneVerificationService;
pub use session::InMemorySessionStore;
pub use sms::MockSmsService;
pub use traits::{SessionStore, SmsServiceTrait};
pub use types::VerificationOutcome;
