//! Admin session entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated back-office session.
///
/// Serialized as JSON when stored in an external session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Returns true once the session has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Seconds until expiry, clamped at zero.
    pub fn ttl_seconds(&self) -> u64 {
        (self.expires_at - Utc::now()).num_seconds().max(0) as u64
    }
}
