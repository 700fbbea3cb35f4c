//! Email dispatch seam

use async_trait::async_trait;

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an HTML email, returning the provider's message id
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String>;
}
