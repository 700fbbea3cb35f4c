//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Repository implementations for accounts and the service catalog
//! - Embedded schema migrations

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlAccountRepository, MySqlCategoryRepository, MySqlRatingRepository,
    MySqlScheduleRepository,
};
