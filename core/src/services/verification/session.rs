//! Process-local session store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::pending_verification::PendingVerification;
use crate::errors::DomainError;

use super::traits::SessionStore;

/// Session store backed by a map; contents are lost on restart and not
/// shared between processes
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, PendingVerification>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently holding a pending code
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<PendingVerification>, DomainError> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn set(&self, session_id: &str, pending: PendingVerification) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), pending);
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> Result<(), DomainError> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}
