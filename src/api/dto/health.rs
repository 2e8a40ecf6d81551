//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// `status` reports the helpers themselves and is always `UP`; store
/// connectivity is reported separately under `database`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub database: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_error: Option<String>,
}
