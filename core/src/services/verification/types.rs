//! Outcome of a phone verification request

use serde::Serialize;

use crate::errors::TokenError;

/// Result of one call to the phone verification flow.
///
/// Each variant carries its client-facing message and maps to exactly one
/// HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// A fresh code was issued and sent
    Sent,
    /// A code was pending but none was submitted
    Invalid,
    /// The submitted code did not match
    Incorrect,
    /// The account's phone number is already verified
    AlreadyVerified,
    /// The requested number belongs to an account already
    AlreadyExists,
    /// The SMS could not be dispatched
    SendError,
    /// The code matched and the account was updated
    Success,
    /// The bearer token's signature has expired
    TokenExpired,
    /// The bearer token could not be decoded or is not an access token
    TokenMalformed,
}

impl VerificationOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::Sent => "OTP sent successfully",
            VerificationOutcome::Invalid => "Invalid OTP!",
            VerificationOutcome::Incorrect => "OTP Incorrect!",
            VerificationOutcome::AlreadyVerified => "Phone number already validated",
            VerificationOutcome::AlreadyExists => "Phone number already Exist",
            VerificationOutcome::SendError => "Sending OTP Error",
            VerificationOutcome::Success => "OTP Code Verified",
            VerificationOutcome::TokenExpired => "Verification link expired",
            VerificationOutcome::TokenMalformed => "Invalid token",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            VerificationOutcome::Sent | VerificationOutcome::Success => 200,
            VerificationOutcome::AlreadyVerified | VerificationOutcome::AlreadyExists => 403,
            VerificationOutcome::SendError
            | VerificationOutcome::Invalid
            | VerificationOutcome::Incorrect
            | VerificationOutcome::TokenExpired
            | VerificationOutcome::TokenMalformed => 400,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Sent | VerificationOutcome::Success)
    }
}

impl From<TokenError> for VerificationOutcome {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => VerificationOutcome::TokenExpired,
            _ => VerificationOutcome::TokenMalformed,
        }
    }
}
