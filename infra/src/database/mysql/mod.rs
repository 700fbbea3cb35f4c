//! MySQL repository implementations

mod account_repository_impl;
mod catalog_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use catalog_repository_impl::{
    MySqlCategoryRepository, MySqlRatingRepository, MySqlScheduleRepository,
};

use hh_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

/// Map a query failure, turning unique-key violations into `Conflict`
pub(crate) fn query_error(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DomainError::Conflict {
                message: format!("{}: duplicate value", context),
            };
        }
    }
    DomainError::Database {
        message: format!("{}: {}", context, err),
    }
}

/// Read a column, naming it in the error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Database {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Ids are stored as CHAR(36)
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}
