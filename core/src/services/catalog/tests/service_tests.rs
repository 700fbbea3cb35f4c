//! Unit tests for catalog services

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::{Account, NewAccount, Role};
use crate::domain::entities::rating::NewRating;
use crate::domain::entities::schedule::{NewSchedule, ScheduleChanges};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{
    AccountRepository, MockAccountRepository, MockCategoryRepository, MockRatingRepository,
    MockScheduleRepository,
};
use crate::services::catalog::{CategoryService, RatingService, ScheduleService};

fn account(email: &str, phone: &str, role: Role) -> Account {
    Account::new(
        NewAccount {
            email: email.to_string(),
            username: "u".to_string(),
            first_name: "F".to_string(),
            last_name: "L".to_string(),
            phone_number: phone.to_string(),
            password: String::new(),
            location: None,
            business_name: None,
        },
        role,
        "hash".to_string(),
    )
}

async fn people(accounts: &MockAccountRepository) -> (Account, Account) {
    let customer = accounts
        .create(account("c@example.com", "0901-000-0001", Role::Customer))
        .await
        .unwrap();
    let provider = accounts
        .create(account("p@example.com", "0901-000-0002", Role::ServiceProvider))
        .await
        .unwrap();
    (customer, provider)
}

#[tokio::test]
async fn test_category_create_rules() {
    let service = CategoryService::new(Arc::new(MockCategoryRepository::new()));

    let created = service.create("  Plumbing ").await.unwrap();
    assert_eq!(created.name, "Plumbing");

    assert!(matches!(
        service.create("plumbing").await,
        Err(DomainError::Conflict { .. })
    ));
    assert!(matches!(
        service.create("   ").await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
    assert!(matches!(
        service.create(&"x".repeat(226)).await,
        Err(DomainError::ValidationErr(ValidationError::TooLong { max: 225, .. }))
    ));

    service.delete(created.id).await.unwrap();
    assert!(matches!(
        service.delete(created.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_rating_rules() {
    let accounts = Arc::new(MockAccountRepository::new());
    let (customer, provider) = people(&accounts).await;
    let service = RatingService::new(accounts.clone(), Arc::new(MockRatingRepository::new()));
    let input = |rating: u8, provider_id: Uuid| NewRating {
        service_provider_id: provider_id,
        rating,
        review: "Great work".to_string(),
    };

    assert!(matches!(
        service.create(customer.id, input(6, provider.id)).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));
    assert!(matches!(
        service.create(provider.id, input(5, provider.id)).await,
        Err(DomainError::Forbidden { .. })
    ));
    // rating another customer is not allowed
    assert!(matches!(
        service.create(customer.id, input(5, customer.id)).await,
        Err(DomainError::NotFound { .. })
    ));

    let rating = service.create(customer.id, input(4, provider.id)).await.unwrap();
    assert_eq!(service.list_for_provider(provider.id).await.unwrap(), vec![rating.clone()]);

    assert!(matches!(
        service.delete(provider.id, rating.id).await,
        Err(DomainError::Forbidden { .. })
    ));
    service.delete(customer.id, rating.id).await.unwrap();
    assert!(service.list_for_provider(provider.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_schedule_participants_only() {
    let accounts = Arc::new(MockAccountRepository::new());
    let (customer, provider) = people(&accounts).await;
    let service = ScheduleService::new(accounts.clone(), Arc::new(MockScheduleRepository::new()));

    let booking = NewSchedule {
        title: "Fix sink".to_string(),
        service_provider_id: provider.id,
        date_and_time: Utc::now() + Duration::days(1),
        detail: "Kitchen".to_string(),
    };

    assert!(matches!(
        service.create(provider.id, booking.clone()).await,
        Err(DomainError::Forbidden { .. })
    ));
    let schedule = service.create(customer.id, booking).await.unwrap();

    // both participants see it
    assert_eq!(service.get(provider.id, schedule.id).await.unwrap().id, schedule.id);
    assert_eq!(service.list_for_account(customer.id).await.unwrap().len(), 1);

    let stranger = Uuid::new_v4();
    assert!(matches!(
        service.get(stranger, schedule.id).await,
        Err(DomainError::Forbidden { .. })
    ));
    assert!(matches!(
        service.delete(stranger, schedule.id).await,
        Err(DomainError::Forbidden { .. })
    ));

    let updated = service
        .update(
            provider.id,
            schedule.id,
            ScheduleChanges {
                detail: Some("Kitchen and bathroom".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.detail, "Kitchen and bathroom");
    assert_eq!(updated.title, "Fix sink");

    service.delete(customer.id, schedule.id).await.unwrap();
    assert!(matches!(
        service.get(customer.id, schedule.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
