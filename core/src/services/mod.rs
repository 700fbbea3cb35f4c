//! Business services containing domain logic and use cases.

pub mod account;
pub mod catalog;
pub mod token;
pub mod verification;

pub use account::{
    AccountService, AccountServiceConfig, EmailServiceTrait, MockEmailService, PasswordChange,
    Registration, SentEmail,
};
pub use catalog::{CategoryService, RatingService, ScheduleService};
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{
    InMemorySessionStore, MockSmsService, PhoneVerificationService, SessionStore,
    SmsServiceTrait, VerificationOutcome, VerificationServiceConfig,
};
