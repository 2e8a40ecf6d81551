#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use cas_test_helpers::api::routes::test_helper_routes;
use cas_test_helpers::domain::entities::{MatchStatus, RegisteredResource};
use cas_test_helpers::domain::repositories::ResourceRepository;
use cas_test_helpers::error::AppError;
use cas_test_helpers::infrastructure::persistence::InMemoryResourceRepository;
use cas_test_helpers::state::AppState;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

pub const TEST_SERVICE_NAME: &str = "Consent & Authorisation Stub";

pub fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn create_test_resource(id: &str, friendly_name: Option<&str>) -> RegisteredResource {
    RegisteredResource {
        resource_id: id.to_string(),
        name: format!("Pension {id}"),
        description: Some(format!("Description for {id}")),
        match_status: MatchStatus::MatchYes,
        resource_scopes: BTreeSet::from(["owner".to_string(), "value".to_string()]),
        rpt: Some(format!("rpt-{id}")),
        pat: Some(format!("pat-{id}")),
        friendly_name: friendly_name.map(str::to_string),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// Store whose every call fails, as if the database were unreachable.
pub struct FailingResourceRepository;

fn connection_refused() -> AppError {
    AppError::internal("error communicating with database: Connection refused", json!({}))
}

#[async_trait]
impl ResourceRepository for FailingResourceRepository {
    async fn find_by_resource_id(&self, _: &str) -> Result<Option<RegisteredResource>, AppError> {
        Err(connection_refused())
    }

    async fn find_all(&self) -> Result<Vec<RegisteredResource>, AppError> {
        Err(connection_refused())
    }

    async fn delete_all(&self, _: &[RegisteredResource]) -> Result<u64, AppError> {
        Err(connection_refused())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(connection_refused())
    }
}

pub fn create_test_state(repository: Arc<dyn ResourceRepository>) -> AppState {
    AppState::new(repository, TEST_SERVICE_NAME)
}

pub fn make_server(repository: Arc<dyn ResourceRepository>) -> TestServer {
    let app = Router::new()
        .nest("/test-helpers", test_helper_routes())
        .with_state(create_test_state(repository));
    TestServer::new(app).unwrap()
}

pub fn seeded_repository(resources: Vec<RegisteredResource>) -> Arc<InMemoryResourceRepository> {
    Arc::new(InMemoryResourceRepository::with_resources(resources))
}
