//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access and refresh token generation for login
//! - Email verification link tokens
//! - Decoding with distinct expired / malformed / wrong-use errors

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
