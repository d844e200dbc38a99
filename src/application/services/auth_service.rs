//! Admin authentication backed by an injectable session store.

use base64::Engine as _;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::AdminSession;
use crate::error::AppError;
use crate::infrastructure::session::SessionStore;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes per session id before base64 encoding.
const SESSION_ID_BYTES: usize = 32;

/// Service for admin login, session validation, and logout.
///
/// The admin password is never kept in memory in plain form: only its
/// HMAC-SHA256 under `signing_secret` is stored, and candidate passwords are
/// checked with a constant-time MAC comparison.
pub struct AuthService {
    store: Arc<dyn SessionStore>,
    signing_secret: String,
    password_mac: Vec<u8>,
    session_ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `store` - session backend
    /// - `admin_password` - the back-office password
    /// - `signing_secret` - HMAC key used to digest passwords
    /// - `session_ttl_seconds` - lifetime of new sessions
    pub fn new(
        store: Arc<dyn SessionStore>,
        admin_password: &str,
        signing_secret: String,
        session_ttl_seconds: u64,
    ) -> Self {
        let password_mac = mac_for(&signing_secret, admin_password)
            .finalize()
            .into_bytes()
            .to_vec();

        Self {
            store,
            signing_secret,
            password_mac,
            session_ttl: Duration::seconds(session_ttl_seconds as i64),
        }
    }

    /// Checks the admin password and opens a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on a wrong password.
    /// Returns [`AppError::Internal`] if the session cannot be stored.
    pub async fn login(&self, password: &str) -> Result<AdminSession, AppError> {
        if mac_for(&self.signing_secret, password)
            .verify_slice(&self.password_mac)
            .is_err()
        {
            tracing::warn!("Rejected admin login attempt");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credentials" }),
            ));
        }

        let now = Utc::now();
        let session = AdminSession {
            id: generate_session_id()?,
            created_at: now,
            expires_at: now + self.session_ttl,
        };

        self.store.put(&session).await.map_err(|e| {
            tracing::error!("Failed to store session: {}", e);
            AppError::internal("Failed to create session", json!({}))
        })?;

        tracing::info!(expires_at = %session.expires_at, "Admin session opened");
        Ok(session)
    }

    /// Validates a session id.
    ///
    /// Store failures are treated as an invalid session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is unknown, expired,
    /// or cannot be read.
    pub async fn authenticate(&self, session_id: &str) -> Result<AdminSession, AppError> {
        match self.store.get(session_id).await {
            Ok(Some(session)) => Ok(session),
            Ok(None) => Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired session" }),
            )),
            Err(e) => {
                tracing::warn!("Session lookup failed: {}", e);
                Err(AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Session store unavailable" }),
                ))
            }
        }
    }

    /// Ends a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the removal.
    pub async fn logout(&self, session_id: &str) -> Result<(), AppError> {
        self.store.remove(session_id).await.map_err(|e| {
            tracing::error!("Failed to remove session: {}", e);
            AppError::internal("Failed to end session", json!({}))
        })
    }

    /// Reports whether the session backend is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}

fn mac_for(secret: &str, value: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    mac
}

/// Generates an unguessable URL-safe session id.
fn generate_session_id() -> Result<String, AppError> {
    let mut buffer = [0u8; SESSION_ID_BYTES];
    getrandom::fill(&mut buffer).map_err(|e| {
        tracing::error!("Failed to gather entropy: {}", e);
        AppError::internal("Failed to create session", json!({}))
    })?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
