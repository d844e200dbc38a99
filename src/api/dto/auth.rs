//! DTOs for admin login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Issued session; send `session_id` as a Bearer token on admin requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}
