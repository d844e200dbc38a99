//! Process-local session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::service::{SessionResult, SessionStore};
use crate::domain::entities::AdminSession;

/// Session store backed by a `HashMap` behind an async `RwLock`.
///
/// Sessions are lost on restart and are not shared between instances.
/// Expired entries are dropped when they are next read or when a new
/// session is stored.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory session store");
        Self::default()
    }

    /// Number of sessions currently held, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session: &AdminSession) -> SessionResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired());
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn get(&self, session_id: &str) -> SessionResult<Option<AdminSession>> {
        let session = self.sessions.read().await.get(session_id).cloned();

        match session {
            Some(session) if session.is_expired() => {
                self.sessions.write().await.remove(session_id);
                debug!("Evicted expired session");
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn remove(&self, session_id: &str) -> SessionResult<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
