//! In-memory implementation of AccountRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use hh_shared::utils::phone::phone_numbers_match;

use crate::domain::entities::account::{Account, Role};
use crate::errors::DomainError;

use super::r#trait::AccountRepository;

/// In-memory account repository
#[derive(Clone, Default)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let map = accounts.into_iter().map(|a| (a.id, a)).collect();
        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let email = email.trim().to_lowercase();
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| phone_numbers_match(&a.phone_number, phone))
            .cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut matching: Vec<Account> = accounts
            .values()
            .filter(|a| a.role == role)
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.created_at);
        Ok(matching)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Conflict {
                message: "Email already registered".to_string(),
            });
        }
        if accounts
            .values()
            .any(|a| phone_numbers_match(&a.phone_number, &account.phone_number))
        {
            return Err(DomainError::Conflict {
                message: "Phone number already registered".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::not_found("Account"));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }
}
