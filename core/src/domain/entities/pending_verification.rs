//! Session-scoped record of an issued but unconfirmed phone code.

use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of generated one-time codes
pub const CODE_LENGTH: usize = 6;

/// A one-time code waiting to be confirmed, held in the requester's session.
///
/// At most one exists per session. It is consumed by the first submission,
/// whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    /// Phone number the code was sent to
    pub target: String,
    /// The 6-digit code
    pub code: String,
    /// When the code was issued
    pub issued_at: DateTime<Utc>,
}

impl PendingVerification {
    /// Creates a pending verification with a freshly generated code
    pub fn issue(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            code: generate_code(),
            issued_at: Utc::now(),
        }
    }

    /// Exact string comparison against the submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

/// Generates a zero-padded 6-digit code from the OS random source
pub fn generate_code() -> String {
    let value: u32 = OsRng.gen_range(0..1_000_000);
    format!("{:06}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_issue_sets_target() {
        let pending = PendingVerification::issue("0901-000-0001");
        assert_eq!(pending.target, "0901-000-0001");
        assert_eq!(pending.code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_matches_is_exact() {
        let pending = PendingVerification {
            target: "0901-000-0001".to_string(),
            code: "123456".to_string(),
            issued_at: Utc::now(),
        };
        assert!(pending.matches("123456"));
        assert!(!pending.matches("000000"));
        assert!(!pending.matches(" 123456"));
        assert!(!pending.matches(""));
    }
}
