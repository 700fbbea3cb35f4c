//! Type definitions shared by the API layer
//!
//! - `response` - API response wrappers

pub mod response;

pub use response::{ApiResponse, StatusMessage};
