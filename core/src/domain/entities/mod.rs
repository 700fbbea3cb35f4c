//! Domain entities representing core business objects.

pub mod account;
pub mod category;
pub mod pending_verification;
pub mod rating;
pub mod schedule;
pub mod token;

pub use account::{Account, AccountChanges, NewAccount, Role};
pub use category::{Category, CATEGORY_NAME_MAX_LEN};
pub use pending_verification::{PendingVerification, CODE_LENGTH};
pub use rating::{NewRating, Rating, MAX_RATING, MIN_RATING};
pub use schedule::{NewSchedule, Schedule, ScheduleChanges, SCHEDULE_TITLE_MAX_LEN};
pub use token::{Claims, TokenPair, TokenUse, JWT_AUDIENCE, JWT_ISSUER};
