//! A customer's rating of a service provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// Rating input
#[derive(Debug, Clone)]
pub struct NewRating {
    pub service_provider_id: Uuid,
    pub rating: u8,
    pub review: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    /// Provider being rated
    pub service_provider_id: Uuid,
    /// Customer who left the rating
    pub customer_id: Uuid,
    /// 1..=5
    pub rating: u8,
    pub review: String,
    pub rated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(customer_id: Uuid, input: NewRating) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_provider_id: input.service_provider_id,
            customer_id,
            rating: input.rating,
            review: input.review,
            rated_at: Utc::now(),
        }
    }

    /// Whether a rating value is within the accepted range
    pub fn is_valid_value(value: u8) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!Rating::is_valid_value(0));
        assert!(Rating::is_valid_value(1));
        assert!(Rating::is_valid_value(5));
        assert!(!Rating::is_valid_value(6));
    }
}
