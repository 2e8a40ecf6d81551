//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health and store connectivity.
///
/// # Endpoint
///
/// `GET /test-helpers/health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store probe failed
///
/// # Response
///
/// ```json
/// {
///   "status": "UP",
///   "service": "Consent & Authorisation Stub",
///   "timestamp": "2025-03-01T10:00:00.000Z",
///   "database": "UP",
///   "resourceCount": 4
/// }
/// ```
///
/// On failure `resourceCount` is replaced by `databaseError` and `database`
/// becomes `DOWN`. Store errors never escape this handler.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut response = HealthResponse {
        status: "UP".to_string(),
        service: state.service_name.to_string(),
        timestamp,
        database: "UP".to_string(),
        resource_count: None,
        database_error: None,
    };

    match state.resource_service.count_resources().await {
        Ok(count) => {
            response.resource_count = Some(count);
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check: resource store unreachable");
            response.database = "DOWN".to_string();
            let message = e.to_string();
            response.database_error = Some(if message.is_empty() {
                "Resource store unavailable".to_string()
            } else {
                message
            });
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
        }
    }
}
