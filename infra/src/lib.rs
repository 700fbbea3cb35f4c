//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `hh_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis client and the Redis-backed session store
//! - **SMS**: Twilio over its REST API, or the in-process mock
//! - **Email**: SMTP through lettre, or the in-process mock

pub mod cache;
pub mod database;
pub mod email;
pub mod sms;

use hh_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored data could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS provider rejected the message
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Email could not be built or delivered
    #[error("Email service error: {0}")]
    Email(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
