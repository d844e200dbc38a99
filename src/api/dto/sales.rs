//! DTOs for sale record statistics.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SalesCountResponse {
    pub total: i64,
}
