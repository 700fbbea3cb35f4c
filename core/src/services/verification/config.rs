//! Configuration for the phone verification service

/// Configuration for the phone verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Text sent by SMS; `{code}` is replaced with the one-time code
    pub message_template: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            message_template: String::from("Your HireHub verification code is {code}"),
        }
    }
}

impl VerificationServiceConfig {
    /// Render the SMS body for a code
    pub fn render(&self, code: &str) -> String {
        self.message_template.replace("{code}", code)
    }
}
