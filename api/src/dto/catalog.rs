use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hh_core::domain::entities::{NewRating, NewSchedule, ScheduleChanges};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Range and length are checked by the rating service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRatingRequest {
    pub service_provider_id: Uuid,
    pub rating: u8,
    #[serde(default)]
    pub review: String,
}

impl From<CreateRatingRequest> for NewRating {
    fn from(request: CreateRatingRequest) -> Self {
        NewRating {
            service_provider_id: request.service_provider_id,
            rating: request.rating,
            review: request.review,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub title: String,
    pub service_provider_id: Uuid,
    pub date_and_time: DateTime<Utc>,
    #[serde(default)]
    pub detail: String,
}

impl From<CreateScheduleRequest> for NewSchedule {
    fn from(request: CreateScheduleRequest) -> Self {
        NewSchedule {
            title: request.title,
            service_provider_id: request.service_provider_id,
            date_and_time: request.date_and_time,
            detail: request.detail,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub title: Option<String>,
    pub date_and_time: Option<DateTime<Utc>>,
    pub detail: Option<String>,
}

impl From<UpdateScheduleRequest> for ScheduleChanges {
    fn from(request: UpdateScheduleRequest) -> Self {
        ScheduleChanges {
            title: request.title,
            date_and_time: request.date_and_time,
            detail: request.detail,
        }
    }
}
