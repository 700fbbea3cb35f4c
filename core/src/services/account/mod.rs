//! Account service module
//!
//! Registration, login and token refresh, email verification, password
//! change and reset, and profile management for both roles.

mod config;
mod email;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use email::{MockEmailService, SentEmail};
pub use service::AccountService;
pub use traits::EmailServiceTrait;
pub use types::{PasswordChange, Registration};
