//! Shared utilities and common types for the HireHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (phone normalization, password rules, etc.)
//! - Common response wrappers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, EmailConfig, Environment, JwtConfig,
    ServerConfig, SessionConfig, SessionStoreKind, SmsConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, StatusMessage};
pub use utils::{phone, validation};
