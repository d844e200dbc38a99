//! Redis-backed session store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

use super::service::{SessionError, SessionResult, SessionStore};
use crate::domain::entities::AdminSession;

/// Session store keeping JSON-encoded sessions in Redis with `SET EX`.
///
/// Expiry is delegated to Redis; the TTL is derived from each session's
/// `expires_at`.
pub struct RedisSessionStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisSessionStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> SessionResult<Self> {
        info!("Connecting to Redis session store");

        let client = Client::open(redis_url).map_err(|e| {
            SessionError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            SessionError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| SessionError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis session store");

        Ok(Self {
            client: manager,
            key_prefix: "session:".to_string(),
        })
    }

    fn build_key(&self, session_id: &str) -> String {
        format!("{}{}", self.key_prefix, session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, session: &AdminSession) -> SessionResult<()> {
        let ttl = session.ttl_seconds();
        if ttl == 0 {
            return Ok(());
        }

        let payload = serde_json::to_string(session)
            .map_err(|e| SessionError::OperationError(e.to_string()))?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(self.build_key(&session.id), payload, ttl)
            .await
            .map_err(|e| SessionError::OperationError(format!("Redis SET failed: {}", e)))?;

        debug!("Session stored (TTL: {}s)", ttl);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> SessionResult<Option<AdminSession>> {
        let mut conn = self.client.clone();

        let payload: Option<String> = conn
            .get(self.build_key(session_id))
            .await
            .map_err(|e| SessionError::OperationError(format!("Redis GET failed: {}", e)))?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        match serde_json::from_str::<AdminSession>(&payload) {
            Ok(session) if !session.is_expired() => Ok(Some(session)),
            Ok(_) => Ok(None),
            Err(e) => {
                warn!("Discarding unreadable session payload: {}", e);
                Ok(None)
            }
        }
    }

    async fn remove(&self, session_id: &str) -> SessionResult<()> {
        let mut conn = self.client.clone();

        conn.del::<_, i32>(self.build_key(session_id))
            .await
            .map_err(|e| SessionError::OperationError(format!("Redis DEL failed: {}", e)))?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
