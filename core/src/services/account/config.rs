//! Configuration for the account service

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Base URL prepended to links sent by email
    pub public_base_url: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            public_base_url: String::from("http://localhost:8080"),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AccountServiceConfig {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            ..Default::default()
        }
    }

    /// Link that verifies an email address
    pub fn email_verification_link(&self, token: &str) -> String {
        format!(
            "{}/api/v1/auth/verify-email?token={}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }

    /// Link to the password reset endpoint
    pub fn password_reset_link(&self) -> String {
        format!(
            "{}/api/v1/auth/reset-password",
            self.public_base_url.trim_end_matches('/')
        )
    }
}
