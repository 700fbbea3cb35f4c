//! Shared application state
//!
//! Services are bound to trait objects so the same state type serves MySQL
//! and Redis backends in production and in-memory ones in tests.

use std::sync::Arc;

use hh_core::repositories::{
    AccountRepository, CategoryRepository, RatingRepository, ScheduleRepository,
};
use hh_core::services::{
    AccountService, AccountServiceConfig, CategoryService, EmailServiceTrait,
    PhoneVerificationService, RatingService, ScheduleService, SessionStore, SmsServiceTrait,
    TokenService, TokenServiceConfig, VerificationServiceConfig,
};
use hh_shared::config::{AuthConfig, SessionConfig};

pub type DynAccountService = AccountService<dyn AccountRepository, dyn EmailServiceTrait>;
pub type DynPhoneVerificationService =
    PhoneVerificationService<dyn AccountRepository, dyn SmsServiceTrait, dyn SessionStore>;
pub type DynCategoryService = CategoryService<dyn CategoryRepository>;
pub type DynRatingService = RatingService<dyn AccountRepository, dyn RatingRepository>;
pub type DynScheduleService = ScheduleService<dyn AccountRepository, dyn ScheduleRepository>;

/// Storage and delivery backends the services run on
#[derive(Clone)]
pub struct Backends {
    pub accounts: Arc<dyn AccountRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub ratings: Arc<dyn RatingRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub sms: Arc<dyn SmsServiceTrait>,
    pub email: Arc<dyn EmailServiceTrait>,
}

/// Application state that holds shared services
pub struct AppState {
    pub accounts: Arc<DynAccountService>,
    pub verification: Arc<DynPhoneVerificationService>,
    pub categories: Arc<DynCategoryService>,
    pub ratings: Arc<DynRatingService>,
    pub schedules: Arc<DynScheduleService>,
    pub tokens: Arc<TokenService>,
    pub session: SessionConfig,
}

impl AppState {
    pub fn new(backends: Backends, auth: &AuthConfig, account_config: AccountServiceConfig) -> Self {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&auth.jwt)));

        let accounts = AccountService::new(
            backends.accounts.clone(),
            backends.email,
            tokens.clone(),
            account_config,
        );
        let verification = PhoneVerificationService::new(
            backends.accounts.clone(),
            backends.sms,
            backends.sessions,
            VerificationServiceConfig::default(),
        );

        Self {
            accounts: Arc::new(accounts),
            verification: Arc::new(verification),
            categories: Arc::new(CategoryService::new(backends.categories)),
            ratings: Arc::new(RatingService::new(backends.accounts.clone(), backends.ratings)),
            schedules: Arc::new(ScheduleService::new(backends.accounts, backends.schedules)),
            tokens,
            session: auth.session.clone(),
        }
    }
}
