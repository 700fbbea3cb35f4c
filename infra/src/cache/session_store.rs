//! Redis-backed session store for pending phone verifications

use async_trait::async_trait;
use hh_core::domain::entities::PendingVerification;
use hh_core::errors::DomainError;
use hh_core::services::verification::SessionStore;
use hh_shared::config::CacheConfig;
use hh_shared::utils::phone::mask_phone_number;

use super::RedisClient;
use crate::InfrastructureError;

/// Stores each session's pending verification as JSON, expiring with the session
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient, ttl_seconds: u64) -> Self {
        Self {
            client,
            ttl_seconds,
        }
    }

    fn key(&self, session_id: &str) -> String {
        session_key(self.client.config(), session_id)
    }
}

/// `{prefix}:session:{id}:pending_verification`
pub(crate) fn session_key(config: &CacheConfig, session_id: &str) -> String {
    config.make_key(&format!("session:{}:pending_verification", session_id))
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<PendingVerification>, DomainError> {
        let raw = self.client.get(&self.key(session_id)).await?;
        raw.map(|json| serde_json::from_str(&json).map_err(InfrastructureError::from))
            .transpose()
            .map_err(DomainError::from)
    }

    async fn set(&self, session_id: &str, pending: PendingVerification) -> Result<(), DomainError> {
        let json = serde_json::to_string(&pending).map_err(InfrastructureError::from)?;
        self.client
            .set_with_expiry(&self.key(session_id), &json, self.ttl_seconds)
            .await?;
        tracing::debug!(
            target_phone = %mask_phone_number(&pending.target),
            "Pending verification stored"
        );
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> Result<(), DomainError> {
        self.client.delete(&self.key(session_id)).await?;
        Ok(())
    }
}
