//! Account entity representing a registered customer or service provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role an account plays on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Books and rates services
    Customer,
    /// Offers services and receives bookings
    ServiceProvider,
}

impl Role {
    /// Stable string form used in tokens and the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::ServiceProvider => "service_provider",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "service_provider" => Ok(Role::ServiceProvider),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Registration input, before hashing and persistence
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: String,
    pub location: Option<String>,
    pub business_name: Option<String>,
}

/// Partial profile update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
    pub business_name: Option<String>,
}

/// Account entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    /// Phone number exactly as the owner entered it
    pub phone_number: String,

    pub location: Option<String>,

    pub role: Role,

    /// Whether the email address has been confirmed through a verification link
    pub email_verified: bool,

    /// Whether the phone number has been confirmed through a one-time code
    pub phone_verified: bool,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Trading name, service providers only
    pub business_name: Option<String>,

    /// Whether the business has been vetted by staff
    pub is_verified_business: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new, unverified account from registration input and an
    /// already computed password hash
    pub fn new(input: NewAccount, role: Role, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: input.email.trim().to_lowercase(),
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            phone_number: input.phone_number.trim().to_string(),
            location: input.location,
            role,
            email_verified: false,
            phone_verified: false,
            password_hash,
            business_name: match role {
                Role::ServiceProvider => input.business_name,
                Role::Customer => None,
            },
            is_verified_business: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the email address as verified
    pub fn verify_email(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }

    /// Marks the current phone number as verified
    pub fn verify_phone(&mut self) {
        self.phone_verified = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the phone number with one that has just been proven and marks it verified
    pub fn change_phone(&mut self, number: impl Into<String>) {
        self.phone_number = number.into();
        self.verify_phone();
    }

    /// Replaces the password hash
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
        self.updated_at = Utc::now();
    }

    /// Applies a partial profile update
    pub fn apply(&mut self, changes: AccountChanges) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(location) = changes.location {
            self.location = Some(location);
        }
        if self.is_service_provider() {
            if let Some(business_name) = changes.business_name {
                self.business_name = Some(business_name);
            }
        }
        self.updated_at = Utc::now();
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }

    pub fn is_service_provider(&self) -> bool {
        self.role == Role::ServiceProvider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account_input() -> NewAccount {
        NewAccount {
            email: " Jane@Example.com ".to_string(),
            username: "jane".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "0901-000-0001".to_string(),
            password: "Secret123".to_string(),
            location: None,
            business_name: Some("Jane's Plumbing".to_string()),
        }
    }

    #[test]
    fn test_new_account_is_unverified() {
        let account = Account::new(new_account_input(), Role::Customer, "hash".to_string());

        assert_eq!(account.email, "jane@example.com");
        assert!(!account.email_verified);
        assert!(!account.phone_verified);
        assert!(account.is_customer());
        // customers never carry a business name
        assert!(account.business_name.is_none());
    }

    #[test]
    fn test_service_provider_keeps_business_name() {
        let account = Account::new(new_account_input(), Role::ServiceProvider, "hash".to_string());
        assert_eq!(account.business_name.as_deref(), Some("Jane's Plumbing"));
        assert!(!account.is_verified_business);
    }

    #[test]
    fn test_change_phone_verifies() {
        let mut account = Account::new(new_account_input(), Role::Customer, "hash".to_string());
        account.change_phone("0901-000-0002");

        assert_eq!(account.phone_number, "0901-000-0002");
        assert!(account.phone_verified);
    }

    #[test]
    fn test_apply_partial_changes() {
        let mut account = Account::new(new_account_input(), Role::Customer, "hash".to_string());
        account.apply(AccountChanges {
            first_name: Some("Janet".to_string()),
            business_name: Some("ignored".to_string()),
            ..Default::default()
        });

        assert_eq!(account.first_name, "Janet");
        assert_eq!(account.last_name, "Doe");
        assert!(account.business_name.is_none());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::ServiceProvider).unwrap(), "\"service_provider\"");
        assert_eq!("customer".parse::<Role>(), Ok(Role::Customer));
        assert!("worker".parse::<Role>().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let account = Account::new(new_account_input(), Role::Customer, "secret-hash".to_string());
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
