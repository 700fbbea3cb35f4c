//! Bookings between customers and service providers

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::Role;
use crate::domain::entities::schedule::{
    NewSchedule, Schedule, ScheduleChanges, SCHEDULE_TITLE_MAX_LEN,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, ScheduleRepository};

use super::check_text;

pub struct ScheduleService<A, S>
where
    A: AccountRepository + ?Sized,
    S: ScheduleRepository + ?Sized,
{
    accounts: Arc<A>,
    schedules: Arc<S>,
}

impl<A, S> ScheduleService<A, S>
where
    A: AccountRepository + ?Sized,
    S: ScheduleRepository + ?Sized,
{
    pub fn new(accounts: Arc<A>, schedules: Arc<S>) -> Self {
        Self {
            accounts,
            schedules,
        }
    }

    /// Bookings where the account is customer or provider
    pub async fn list_for_account(&self, account_id: Uuid) -> DomainResult<Vec<Schedule>> {
        self.schedules.list_for_account(account_id).await
    }

    /// A single booking, visible to its participants only
    pub async fn get(&self, actor: Uuid, id: Uuid) -> DomainResult<Schedule> {
        let schedule = self
            .schedules
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Schedule"))?;
        if !schedule.involves(actor) {
            return Err(DomainError::forbidden("You are not a participant in this schedule"));
        }
        Ok(schedule)
    }

    /// Book a provider; the actor must be a customer
    pub async fn create(&self, actor: Uuid, input: NewSchedule) -> DomainResult<Schedule> {
        check_text("title", &input.title, SCHEDULE_TITLE_MAX_LEN)?;

        let customer = self
            .accounts
            .find_by_id(actor)
            .await?
            .ok_or_else(|| DomainError::not_found("Account"))?;
        if customer.role != Role::Customer {
            return Err(DomainError::forbidden("Only customers can book service providers"));
        }
        self.accounts
            .find_by_id(input.service_provider_id)
            .await?
            .filter(|a| a.role == Role::ServiceProvider)
            .ok_or_else(|| DomainError::not_found("Service provider"))?;

        let schedule = self.schedules.create(Schedule::new(actor, input)).await?;
        tracing::info!(schedule_id = %schedule.id, event = "schedule_created", "Schedule created");
        Ok(schedule)
    }

    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        changes: ScheduleChanges,
    ) -> DomainResult<Schedule> {
        if let Some(title) = &changes.title {
            check_text("title", title, SCHEDULE_TITLE_MAX_LEN)?;
        }
        let mut schedule = self.get(actor, id).await?;
        schedule.apply(changes);
        self.schedules.update(schedule).await
    }

    pub async fn delete(&self, actor: Uuid, id: Uuid) -> DomainResult<()> {
        self.get(actor, id).await?;
        self.schedules.delete(id).await?;
        tracing::info!(schedule_id = %id, event = "schedule_deleted", "Schedule deleted");
        Ok(())
    }
}
