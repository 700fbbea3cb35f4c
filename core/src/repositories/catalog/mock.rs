//! In-memory catalog repositories

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Category, Rating, Schedule};
use crate::errors::DomainError;

use super::r#trait::{CategoryRepository, RatingRepository, ScheduleRepository};

#[derive(Clone, Default)]
pub struct MockCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().await;
        let mut all: Vec<Category> = categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }

    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;
        if categories
            .values()
            .any(|c| c.name.eq_ignore_ascii_case(&category.name))
        {
            return Err(DomainError::Conflict {
                message: format!("Category '{}' already exists", category.name),
            });
        }
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.categories.write().await.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
pub struct MockRatingRepository {
    ratings: Arc<RwLock<HashMap<Uuid, Rating>>>,
}

impl MockRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingRepository for MockRatingRepository {
    async fn list_for_provider(&self, service_provider_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        let mut matching: Vec<Rating> = ratings
            .values()
            .filter(|r| r.service_provider_id == service_provider_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.rated_at.cmp(&a.rated_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, DomainError> {
        Ok(self.ratings.read().await.get(&id).cloned())
    }

    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        self.ratings.write().await.insert(rating.id, rating.clone());
        Ok(rating)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.ratings.write().await.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
pub struct MockScheduleRepository {
    schedules: Arc<RwLock<HashMap<Uuid, Schedule>>>,
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn list_for_account(&self, account_id: Uuid) -> Result<Vec<Schedule>, DomainError> {
        let schedules = self.schedules.read().await;
        let mut matching: Vec<Schedule> = schedules
            .values()
            .filter(|s| s.involves(account_id))
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.date_and_time);
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, DomainError> {
        Ok(self.schedules.read().await.get(&id).cloned())
    }

    async fn create(&self, schedule: Schedule) -> Result<Schedule, DomainError> {
        self.schedules
            .write()
            .await
            .insert(schedule.id, schedule.clone());
        Ok(schedule)
    }

    async fn update(&self, schedule: Schedule) -> Result<Schedule, DomainError> {
        let mut schedules = self.schedules.write().await;
        if !schedules.contains_key(&schedule.id) {
            return Err(DomainError::not_found("Schedule"));
        }
        schedules.insert(schedule.id, schedule.clone());
        Ok(schedule)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.schedules.write().await.remove(&id).is_some())
    }
}
