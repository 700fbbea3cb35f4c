//! Cache module for Redis-backed state
//!
//! Provides the Redis client and the session store that keeps each
//! session's pending phone verification.

pub mod redis_client;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;
