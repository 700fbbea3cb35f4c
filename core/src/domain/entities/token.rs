//! Token entities for JWT-based authentication and email verification links.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Role;

/// JWT issuer
pub const JWT_ISSUER: &str = "hirehub";

/// JWT audience
pub const JWT_AUDIENCE: &str = "hirehub-api";

/// What a token may be used for, carried in the `token_use` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenUse {
    /// Bearer token for API calls
    Access,
    /// Exchanged for a new access token
    Refresh,
    /// Embedded in the link mailed after registration
    EmailVerification,
}

impl TokenUse {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenUse::Access => "access",
            TokenUse::Refresh => "refresh",
            TokenUse::EmailVerification => "email_verification",
        }
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Intended use of this token
    pub token_use: TokenUse,

    /// Account role, present on access and refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Account email, present on access tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// Creates claims for the given use, valid for `ttl_seconds` from now
    pub fn new(account_id: Uuid, token_use: TokenUse, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            token_use,
            role: None,
            email: None,
        }
    }

    /// Attaches the account role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Attaches the account email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access: String,

    /// JWT refresh token
    pub refresh: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let account_id = Uuid::new_v4();
        let claims = Claims::new(account_id, TokenUse::Access, 900)
            .with_role(Role::Customer)
            .with_email("jane@example.com");

        assert_eq!(claims.account_id().unwrap(), account_id);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.exp - claims.iat, 900);
        assert_eq!(claims.role, Some(Role::Customer));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new(Uuid::new_v4(), TokenUse::Refresh, 60);
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_token_use_claim_serialization() {
        let claims = Claims::new(Uuid::new_v4(), TokenUse::EmailVerification, 60);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["token_use"], "email_verification");
        assert!(json.get("role").is_none());
        assert_eq!(TokenUse::EmailVerification.as_str(), "email_verification");
    }
}
