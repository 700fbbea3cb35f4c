//! Repository interfaces and in-memory implementations.

pub mod account;
pub mod catalog;

pub use account::{AccountRepository, MockAccountRepository};
pub use catalog::{
    CategoryRepository, MockCategoryRepository, MockRatingRepository, MockScheduleRepository,
    RatingRepository, ScheduleRepository,
};
