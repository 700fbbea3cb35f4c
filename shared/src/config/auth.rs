//! Authentication and session configuration

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Email verification link expiry time in seconds
    #[serde(default = "default_email_verification_expiry")]
    pub email_verification_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
            email_verification_expiry: default_email_verification_expiry(),
            issuer: String::from("hirehub"),
            audience: String::from("hirehub-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Where pending phone verifications are kept between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    /// Process-local map, lost on restart
    Memory,
    /// Redis, shared between API instances
    Redis,
}

impl std::str::FromStr for SessionStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(SessionStoreKind::Memory),
            "redis" => Ok(SessionStoreKind::Redis),
            _ => Err(format!("Invalid session store: {}", s)),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session timeout in seconds
    pub timeout: u64,

    /// Session cookie name
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie SameSite attribute
    pub same_site: String,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,

    /// Backing store for session data
    pub store: SessionStoreKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: 1_209_600, // 2 weeks
            cookie_name: String::from("hirehub_session"),
            secure: false,
            same_site: String::from("Lax"),
            http_only: default_http_only(),
            store: SessionStoreKind::Memory,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let session_defaults = SessionConfig::default();

        Self {
            jwt: JwtConfig {
                secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
                access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry),
                refresh_token_expiry: env_or("JWT_REFRESH_TOKEN_EXPIRY", defaults.refresh_token_expiry),
                email_verification_expiry: env_or(
                    "EMAIL_VERIFICATION_TOKEN_EXPIRY",
                    defaults.email_verification_expiry,
                ),
                issuer: defaults.issuer,
                audience: defaults.audience,
            },
            session: SessionConfig {
                timeout: env_or("SESSION_TIMEOUT", session_defaults.timeout),
                cookie_name: std::env::var("SESSION_COOKIE_NAME")
                    .unwrap_or(session_defaults.cookie_name),
                store: env_or("SESSION_STORE", session_defaults.store),
                ..session_defaults
            },
        }
    }
}

fn default_email_verification_expiry() -> i64 {
    86400 // 24 hours
}

fn default_http_only() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 604800);
        assert_eq!(config.email_verification_expiry, 86400);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1209600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "hirehub_session");
        assert!(config.http_only);
        assert!(!config.secure);
        assert_eq!(config.store, SessionStoreKind::Memory);
    }

    #[test]
    fn test_session_store_kind_parse() {
        assert_eq!("redis".parse::<SessionStoreKind>(), Ok(SessionStoreKind::Redis));
        assert_eq!("MEMORY".parse::<SessionStoreKind>(), Ok(SessionStoreKind::Memory));
        assert!("sqlite".parse::<SessionStoreKind>().is_err());
    }
}
