//! Ratings left by customers for service providers

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::Role;
use crate::domain::entities::rating::{NewRating, Rating, MAX_RATING, MIN_RATING};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, RatingRepository};

pub struct RatingService<A, G>
where
    A: AccountRepository + ?Sized,
    G: RatingRepository + ?Sized,
{
    accounts: Arc<A>,
    ratings: Arc<G>,
}

impl<A, G> RatingService<A, G>
where
    A: AccountRepository + ?Sized,
    G: RatingRepository + ?Sized,
{
    pub fn new(accounts: Arc<A>, ratings: Arc<G>) -> Self {
        Self { accounts, ratings }
    }

    /// Ratings a provider has received, newest first
    pub async fn list_for_provider(&self, service_provider_id: Uuid) -> DomainResult<Vec<Rating>> {
        self.ratings.list_for_provider(service_provider_id).await
    }

    /// Record a rating from `customer_id`
    pub async fn create(&self, customer_id: Uuid, input: NewRating) -> DomainResult<Rating> {
        if !Rating::is_valid_value(input.rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING as i64,
                max: MAX_RATING as i64,
            }
            .into());
        }

        let rater = self
            .accounts
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account"))?;
        if rater.role != Role::Customer {
            return Err(DomainError::forbidden("Only customers can rate service providers"));
        }

        let provider = self
            .accounts
            .find_by_id(input.service_provider_id)
            .await?
            .filter(|a| a.role == Role::ServiceProvider)
            .ok_or_else(|| DomainError::not_found("Service provider"))?;

        let rating = self.ratings.create(Rating::new(customer_id, input)).await?;
        tracing::info!(
            rating_id = %rating.id,
            service_provider_id = %provider.id,
            event = "rating_created",
            "Rating recorded"
        );
        Ok(rating)
    }

    /// Delete a rating; only the customer who left it may
    pub async fn delete(&self, actor: Uuid, id: Uuid) -> DomainResult<()> {
        let rating = self
            .ratings
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Rating"))?;
        if rating.customer_id != actor {
            return Err(DomainError::forbidden("You can only delete your own ratings"));
        }
        self.ratings.delete(id).await?;
        Ok(())
    }
}
