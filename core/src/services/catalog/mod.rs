//! Service catalog: categories, ratings and schedules

mod category;
mod rating;
mod schedule;

#[cfg(test)]
mod tests;

pub use category::CategoryService;
pub use rating::RatingService;
pub use schedule::ScheduleService;

use crate::errors::{DomainResult, ValidationError};

/// Reject empty or over-long text fields
pub(crate) fn check_text(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        }
        .into());
    }
    Ok(())
}
