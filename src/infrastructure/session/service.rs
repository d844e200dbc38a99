//! Session store trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::AdminSession;

/// Errors that can occur while talking to a session backend.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session store connection error: {0}")]
    ConnectionError(String),
    #[error("Session store operation error: {0}")]
    OperationError(String),
}

/// Result type for session store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Storage for authenticated admin sessions.
///
/// Injected through [`crate::state::AppState`] so the backend can be swapped
/// without touching handlers. Implementations must expire sessions at
/// [`AdminSession::expires_at`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a session until its expiry time.
    async fn put(&self, session: &AdminSession) -> SessionResult<()>;

    /// Looks up a live session; expired or unknown ids yield `Ok(None)`.
    async fn get(&self, session_id: &str) -> SessionResult<Option<AdminSession>>;

    /// Removes a session. Removing an unknown id is not an error.
    async fn remove(&self, session_id: &str) -> SessionResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
