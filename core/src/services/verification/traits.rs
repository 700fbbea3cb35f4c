//! Traits for SMS dispatch and session storage

use async_trait::async_trait;

use crate::domain::entities::pending_verification::PendingVerification;
use crate::errors::DomainError;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a text message, returning the provider's message id
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String>;
}

/// Per-session storage for the single pending verification a session may hold
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Pending verification for the session, if any
    async fn get(&self, session_id: &str) -> Result<Option<PendingVerification>, DomainError>;

    /// Store the pending verification, replacing any previous one
    async fn set(&self, session_id: &str, pending: PendingVerification) -> Result<(), DomainError>;

    /// Drop the pending verification; clearing an empty session is not an error
    async fn clear(&self, session_id: &str) -> Result<(), DomainError>;
}
