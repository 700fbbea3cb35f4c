mod r#trait;
mod mock;


pub use mock::MockAccountRepository;
pub use r#trait::AccountRepository;
