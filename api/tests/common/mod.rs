//! Shared setup for API integration tests: an `AppState` on in-memory
//! backends with handles to the mock SMS, email and session stores.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{cookie::Cookie, dev::ServiceResponse, web};

use hh_api::state::{AppState, Backends};
use hh_core::domain::entities::{Account, NewAccount, Role};
use hh_core::repositories::{
    MockAccountRepository, MockCategoryRepository, MockRatingRepository, MockScheduleRepository,
};
use hh_core::services::{
    AccountServiceConfig, InMemorySessionStore, MockEmailService, MockSmsService,
};
use hh_shared::config::AuthConfig;

pub const PASSWORD: &str = "Secret123";
pub const SESSION_COOKIE: &str = "hirehub_session";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub sms: Arc<MockSmsService>,
    pub email: Arc<MockEmailService>,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let sms = Arc::new(MockSmsService::new());
        let email = Arc::new(MockEmailService::new());
        let sessions = Arc::new(InMemorySessionStore::new());

        let backends = Backends {
            accounts: Arc::new(MockAccountRepository::new()),
            categories: Arc::new(MockCategoryRepository::new()),
            ratings: Arc::new(MockRatingRepository::new()),
            schedules: Arc::new(MockScheduleRepository::new()),
            sessions: sessions.clone(),
            sms: sms.clone(),
            email: email.clone(),
        };

        let account_config = AccountServiceConfig {
            public_base_url: "http://testserver".to_string(),
            bcrypt_cost: 4,
        };

        Self {
            state: web::Data::new(AppState::new(backends, &AuthConfig::default(), account_config)),
            sms,
            email,
            sessions,
        }
    }

    /// Register an account through the service and return it with an access token
    pub async fn seed(&self, email: &str, phone: &str, role: Role) -> (Account, String) {
        let registration = self
            .state
            .accounts
            .register(new_account(email, phone), role)
            .await
            .expect("seed account registers");
        let tokens = self
            .state
            .tokens
            .generate_tokens(&registration.account)
            .expect("tokens issue");
        (registration.account, tokens.access)
    }

    pub async fn account(&self, id: uuid::Uuid) -> Account {
        self.state.accounts.get(id).await.expect("account exists")
    }
}

pub fn new_account(email: &str, phone: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        username: email.split('@').next().unwrap_or("user").to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone_number: phone.to_string(),
        password: PASSWORD.to_string(),
        location: Some("Lagos".to_string()),
        business_name: Some("Fixers Ltd".to_string()),
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// The one-time code is the last word of the SMS body
pub fn otp_from(message: &str) -> String {
    message
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Session cookie set by a response, if any
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| Cookie::new(SESSION_COOKIE, c.value().to_string()))
}
