//! MySQL implementations of the catalog repositories.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hh_core::domain::entities::{Category, Rating, Schedule};
use hh_core::errors::DomainError;
use hh_core::repositories::{CategoryRepository, RatingRepository, ScheduleRepository};

use super::{column, query_error, uuid_column};

async fn delete_by_id(pool: &MySqlPool, table: &str, id: Uuid) -> Result<bool, DomainError> {
    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", table))
        .bind(id.to_string())
        .execute(pool)
        .await
        .map_err(|e| query_error("Failed to delete row", e))?;
    Ok(result.rows_affected() > 0)
}

pub struct MySqlCategoryRepository {
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &MySqlRow) -> Result<Category, DomainError> {
        Ok(Category {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            created_at: column(row, "created_at")?,
        })
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list categories", e))?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, created_at FROM categories WHERE LOWER(name) = ? LIMIT 1",
        )
        .bind(name.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch category", e))?;

        row.as_ref().map(Self::row_to_category).transpose()
    }

    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        sqlx::query("INSERT INTO categories (id, name, created_at) VALUES (?, ?, ?)")
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(category.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to create category", e))?;

        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        delete_by_id(&self.pool, "categories", id).await
    }
}

pub struct MySqlRatingRepository {
    pool: MySqlPool,
}

impl MySqlRatingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_rating(row: &MySqlRow) -> Result<Rating, DomainError> {
        Ok(Rating {
            id: uuid_column(row, "id")?,
            service_provider_id: uuid_column(row, "service_provider_id")?,
            customer_id: uuid_column(row, "customer_id")?,
            rating: column(row, "rating")?,
            review: column(row, "review")?,
            rated_at: column(row, "rated_at")?,
        })
    }
}

#[async_trait]
impl RatingRepository for MySqlRatingRepository {
    async fn list_for_provider(&self, service_provider_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, service_provider_id, customer_id, rating, review, rated_at
            FROM ratings
            WHERE service_provider_id = ?
            ORDER BY rated_at DESC
            "#,
        )
        .bind(service_provider_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("Failed to list ratings", e))?;

        rows.iter().map(Self::row_to_rating).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, service_provider_id, customer_id, rating, review, rated_at
            FROM ratings
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch rating", e))?;

        row.as_ref().map(Self::row_to_rating).transpose()
    }

    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ratings (id, service_provider_id, customer_id, rating, review, rated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(rating.id.to_string())
        .bind(rating.service_provider_id.to_string())
        .bind(rating.customer_id.to_string())
        .bind(rating.rating)
        .bind(&rating.review)
        .bind(rating.rated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to create rating", e))?;

        Ok(rating)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        delete_by_id(&self.pool, "ratings", id).await
    }
}

pub struct MySqlScheduleRepository {
    pool: MySqlPool,
}

const SCHEDULE_COLUMNS: &str =
    "id, title, service_provider_id, customer_id, date_and_time, detail, created_at";

impl MySqlScheduleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_schedule(row: &MySqlRow) -> Result<Schedule, DomainError> {
        Ok(Schedule {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            service_provider_id: uuid_column(row, "service_provider_id")?,
            customer_id: uuid_column(row, "customer_id")?,
            date_and_time: column(row, "date_and_time")?,
            detail: column(row, "detail")?,
            created_at: column(row, "created_at")?,
        })
    }
}

#[async_trait]
impl ScheduleRepository for MySqlScheduleRepository {
    async fn list_for_account(&self, account_id: Uuid) -> Result<Vec<Schedule>, DomainError> {
        let query = format!(
            "SELECT {} FROM schedules WHERE customer_id = ? OR service_provider_id = ? ORDER BY date_and_time",
            SCHEDULE_COLUMNS
        );
        let id = account_id.to_string();

        let rows = sqlx::query(&query)
            .bind(&id)
            .bind(&id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list schedules", e))?;

        rows.iter().map(Self::row_to_schedule).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, DomainError> {
        let query = format!("SELECT {} FROM schedules WHERE id = ?", SCHEDULE_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to fetch schedule", e))?;

        row.as_ref().map(Self::row_to_schedule).transpose()
    }

    async fn create(&self, schedule: Schedule) -> Result<Schedule, DomainError> {
        let query = format!(
            "INSERT INTO schedules ({}) VALUES (?, ?, ?, ?, ?, ?, ?)",
            SCHEDULE_COLUMNS
        );

        sqlx::query(&query)
            .bind(schedule.id.to_string())
            .bind(&schedule.title)
            .bind(schedule.service_provider_id.to_string())
            .bind(schedule.customer_id.to_string())
            .bind(schedule.date_and_time)
            .bind(&schedule.detail)
            .bind(schedule.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to create schedule", e))?;

        Ok(schedule)
    }

    async fn update(&self, schedule: Schedule) -> Result<Schedule, DomainError> {
        let result = sqlx::query(
            "UPDATE schedules SET title = ?, date_and_time = ?, detail = ? WHERE id = ?",
        )
        .bind(&schedule.title)
        .bind(schedule.date_and_time)
        .bind(&schedule.detail)
        .bind(schedule.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to update schedule", e))?;

        if result.rows_affected() == 0 && self.find_by_id(schedule.id).await?.is_none() {
            return Err(DomainError::not_found("Schedule"));
        }

        Ok(schedule)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        delete_by_id(&self.pool, "schedules", id).await
    }
}
