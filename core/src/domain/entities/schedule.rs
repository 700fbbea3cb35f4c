//! A booking between a customer and a service provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a schedule title
pub const SCHEDULE_TITLE_MAX_LEN: usize = 225;

/// Booking input from the customer
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub title: String,
    pub service_provider_id: Uuid,
    pub date_and_time: DateTime<Utc>,
    pub detail: String,
}

/// Partial schedule update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct ScheduleChanges {
    pub title: Option<String>,
    pub date_and_time: Option<DateTime<Utc>>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub title: String,
    pub service_provider_id: Uuid,
    pub customer_id: Uuid,
    pub date_and_time: DateTime<Utc>,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    pub fn new(customer_id: Uuid, input: NewSchedule) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            service_provider_id: input.service_provider_id,
            customer_id,
            date_and_time: input.date_and_time,
            detail: input.detail,
            created_at: Utc::now(),
        }
    }

    /// Whether the account is the customer or the provider on this booking
    pub fn involves(&self, account_id: Uuid) -> bool {
        self.customer_id == account_id || self.service_provider_id == account_id
    }

    pub fn apply(&mut self, changes: ScheduleChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(date_and_time) = changes.date_and_time {
            self.date_and_time = date_and_time;
        }
        if let Some(detail) = changes.detail {
            self.detail = detail;
        }
    }
}
