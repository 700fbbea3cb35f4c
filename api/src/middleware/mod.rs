pub mod auth;
pub mod cors;
pub mod session;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
pub use session::SessionId;
