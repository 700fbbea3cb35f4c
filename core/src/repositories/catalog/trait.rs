//! Persistence interfaces for the service catalog.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Category, Rating, Schedule};
use crate::errors::DomainError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name
    async fn list(&self) -> Result<Vec<Category>, DomainError>;

    /// Case-insensitive lookup by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// # Returns
    /// * `Err(DomainError::Conflict)` - name already taken
    async fn create(&self, category: Category) -> Result<Category, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Ratings received by a provider, newest first
    async fn list_for_provider(&self, service_provider_id: Uuid) -> Result<Vec<Rating>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, DomainError>;

    async fn create(&self, rating: Rating) -> Result<Rating, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Schedules where the account is either the customer or the provider,
    /// ordered by date
    async fn list_for_account(&self, account_id: Uuid) -> Result<Vec<Schedule>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, DomainError>;

    async fn create(&self, schedule: Schedule) -> Result<Schedule, DomainError>;

    /// # Returns
    /// * `Err(DomainError::NotFound)` - no schedule with that id
    async fn update(&self, schedule: Schedule) -> Result<Schedule, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
