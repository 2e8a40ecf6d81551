//! Handlers for resource inspection and cleanup endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resource::{
    DELETE_DYNAMIC_MESSAGE, DeleteResourcesResponse, ResourceListResponse, RptTokenResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a resource with its RPT and PAT tokens.
///
/// # Endpoint
///
/// `GET /test-helpers/rpt-token/{resourceId}`
///
/// # Errors
///
/// Returns 404 if no resource has this ID.
pub async fn rpt_token_handler(
    Path(resource_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RptTokenResponse>, AppError> {
    let resource = state.resource_service.get_resource(&resource_id).await?;

    Ok(Json(resource.into()))
}

/// Lists every stored resource, fixtures included.
///
/// # Endpoint
///
/// `GET /test-helpers/resources`
pub async fn resource_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ResourceListResponse>, AppError> {
    let resources = state.resource_service.list_resources().await?;

    Ok(Json(resources.into()))
}

/// Deletes every resource created during a test run.
///
/// # Endpoint
///
/// `DELETE /test-helpers/resources`
///
/// Resources with a non-blank friendly name are seeded fixtures and are kept.
pub async fn delete_dynamic_resources_handler(
    State(state): State<AppState>,
) -> Result<Json<DeleteResourcesResponse>, AppError> {
    let deleted_count = state.resource_service.delete_dynamic_resources().await?;

    Ok(Json(DeleteResourcesResponse {
        deleted_count,
        message: DELETE_DYNAMIC_MESSAGE.to_string(),
    }))
}
