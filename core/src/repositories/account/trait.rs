//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the storage technology out of the
//! domain layer. MySQL and in-memory implementations exist.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// # Example
/// ```no_run
/// # use hh_core::repositories::AccountRepository;
/// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(account) = repo.find_by_email("jane@example.com").await? {
///     println!("Found {} ({})", account.id, account.role);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by email address (stored lowercased)
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account whose phone number matches, ignoring case and
    /// surrounding whitespace
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError>;

    /// Check whether any account holds the given phone number
    ///
    /// Uses the same matching rule as [`find_by_phone`](Self::find_by_phone).
    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_phone(phone).await?.is_some())
    }

    /// List every account with the given role, oldest first
    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - email or phone number already taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite an existing account
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - no account with that id
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Delete an account
    ///
    /// # Returns
    /// * `Ok(true)` - account was deleted
    /// * `Ok(false)` - account not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
