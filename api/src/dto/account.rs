use serde::{Deserialize, Serialize};
use validator::Validate;

use hh_core::domain::entities::{AccountChanges, NewAccount};

/// Registration body for customers and service providers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(length(min = 1, max = 150))]
    pub first_name: String,
    #[validate(length(min = 1, max = 150))]
    pub last_name: String,
    #[validate(length(min = 7, max = 20))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(max = 225))]
    pub location: Option<String>,
    /// Ignored for customers
    #[validate(length(max = 225))]
    pub business_name: Option<String>,
}

impl From<RegisterRequest> for NewAccount {
    fn from(request: RegisterRequest) -> Self {
        NewAccount {
            email: request.email,
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            password: request.password,
            location: request.location,
            business_name: request.business_name,
        }
    }
}

/// Partial profile update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub last_name: Option<String>,
    #[validate(length(max = 225))]
    pub location: Option<String>,
    #[validate(length(max = 225))]
    pub business_name: Option<String>,
}

impl From<UpdateAccountRequest> for AccountChanges {
    fn from(request: UpdateAccountRequest) -> Self {
        AccountChanges {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            location: request.location,
            business_name: request.business_name,
        }
    }
}
