//! Repositories for categories, ratings and schedules

mod r#trait;
mod mock;


pub use mock::{MockCategoryRepository, MockRatingRepository, MockScheduleRepository};
pub use r#trait::{CategoryRepository, RatingRepository, ScheduleRepository};
