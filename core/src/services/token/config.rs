//! Configuration for the token service

use hh_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
    /// Email verification link lifetime in seconds
    pub email_verification_expiry: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_expiry: jwt.access_token_expiry,
            refresh_token_expiry: jwt.refresh_token_expiry,
            email_verification_expiry: jwt.email_verification_expiry,
            issuer: if jwt.issuer.is_empty() { JWT_ISSUER.to_string() } else { jwt.issuer.clone() },
            audience: if jwt.audience.is_empty() { JWT_AUDIENCE.to_string() } else { jwt.audience.clone() },
        }
    }
}
