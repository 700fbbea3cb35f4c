//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hh_core::domain::entities::account::{Account, Role};
use hh_core::errors::DomainError;
use hh_core::repositories::AccountRepository;

use super::{column, query_error, uuid_column};

const ACCOUNT_COLUMNS: &str = r#"
    id, email, username, first_name, last_name, phone_number, location,
    role, email_verified, phone_verified, password_hash, business_name,
    is_verified_business, created_at, updated_at
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let role: String = column(row, "role")?;
        let role = role
            .parse::<Role>()
            .map_err(|message| DomainError::Database { message })?;

        Ok(Account {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            username: column(row, "username")?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            phone_number: column(row, "phone_number")?,
            location: column(row, "location")?,
            role,
            email_verified: column(row, "email_verified")?,
            phone_verified: column(row, "phone_verified")?,
            password_hash: column(row, "password_hash")?,
            business_name: column(row, "business_name")?,
            is_verified_business: column(row, "is_verified_business")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn fetch_one_where(
        &self,
        condition: &str,
        value: String,
    ) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE {} LIMIT 1",
            ACCOUNT_COLUMNS, condition
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to fetch account", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("id = ?", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("email = ?", email.trim().to_lowercase())
            .await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where(
            "LOWER(TRIM(phone_number)) = ?",
            phone.trim().to_lowercase(),
        )
        .await
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE role = ? ORDER BY created_at ASC",
            ACCOUNT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(role.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list accounts", e))?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, username, first_name, last_name, phone_number, location,
                role, email_verified, phone_verified, password_hash, business_name,
                is_verified_business, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.username)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.phone_number)
            .bind(&account.location)
            .bind(account.role.as_str())
            .bind(account.email_verified)
            .bind(account.phone_verified)
            .bind(&account.password_hash)
            .bind(&account.business_name)
            .bind(account.is_verified_business)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to create account", e))?;

        tracing::info!(account_id = %account.id, role = %account.role, "Account row inserted");
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts SET
                email = ?, username = ?, first_name = ?, last_name = ?,
                phone_number = ?, location = ?, email_verified = ?,
                phone_verified = ?, password_hash = ?, business_name = ?,
                is_verified_business = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.email)
            .bind(&account.username)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.phone_number)
            .bind(&account.location)
            .bind(account.email_verified)
            .bind(account.phone_verified)
            .bind(&account.password_hash)
            .bind(&account.business_name)
            .bind(account.is_verified_business)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to update account", e))?;

        // MySQL reports matched-but-unchanged rows as 0 affected
        if result.rows_affected() == 0 && self.find_by_id(account.id).await?.is_none() {
            return Err(DomainError::not_found("Account"));
        }

        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete account", e))?;

        Ok(result.rows_affected() > 0)
    }
}
