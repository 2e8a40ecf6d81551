//! Test helper route configuration.

use crate::api::handlers::{
    delete_dynamic_resources_handler, health_handler, resource_list_handler, rpt_token_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All test helper routes, mounted under `/test-helpers` by
/// [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET    /rpt-token/{resourceId}` - Resource detail with RPT and PAT tokens
/// - `GET    /resources`              - Every stored resource
/// - `DELETE /resources`              - Delete dynamically created resources
/// - `GET    /health`                 - Service and store health
pub fn test_helper_routes() -> Router<AppState> {
    Router::new()
        .route("/rpt-token/{resource_id}", get(rpt_token_handler))
        .route(
            "/resources",
            get(resource_list_handler).delete(delete_dynamic_resources_handler),
        )
        .route("/health", get(health_handler))
}
