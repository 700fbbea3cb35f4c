//! Inputs and results of account operations

use serde::Serialize;

use crate::domain::entities::account::Account;

/// Result of a successful registration
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    #[serde(flatten)]
    pub account: Account,
    /// Link mailed to the new account; also returned to the caller
    pub verification_link: String,
}

/// Password change request
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}
