//! Registered-resource inspection and cleanup service.

use std::sync::Arc;

use crate::domain::entities::RegisteredResource;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::{debug, info};

/// Service exposing stored resources to test scenarios.
///
/// Reads go straight to the repository. The only write is
/// [`ResourceService::delete_dynamic_resources`], which never touches
/// fixture resources.
pub struct ResourceService<R: ResourceRepository + ?Sized = dyn ResourceRepository> {
    repository: Arc<R>,
}

impl<R: ResourceRepository + ?Sized> ResourceService<R> {
    /// Creates a new resource service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a resource by its resource ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no resource has this ID.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_resource(&self, resource_id: &str) -> Result<RegisteredResource, AppError> {
        self.repository
            .find_by_resource_id(resource_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Resource not found with ID: {resource_id}"),
                    json!({"resource_id": resource_id}),
                )
            })
    }

    /// Lists every stored resource.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_resources(&self) -> Result<Vec<RegisteredResource>, AppError> {
        self.repository.find_all().await
    }

    /// Deletes every dynamic resource and returns how many were removed.
    ///
    /// Fixtures (resources with a non-blank friendly name) are left alone.
    /// Running this twice with no registrations in between removes nothing
    /// the second time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_dynamic_resources(&self) -> Result<u64, AppError> {
        let dynamic: Vec<RegisteredResource> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(RegisteredResource::is_dynamic)
            .collect();

        if dynamic.is_empty() {
            debug!("No dynamic resources to delete");
            return Ok(0);
        }

        let deleted = self.repository.delete_all(&dynamic).await?;
        info!(deleted, candidates = dynamic.len(), "Deleted dynamic resources");

        Ok(deleted)
    }

    /// Counts stored resources. Used as the store connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    pub async fn count_resources(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MatchStatus;
    use crate::domain::repositories::MockResourceRepository;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn create_test_resource(id: &str, friendly_name: Option<&str>) -> RegisteredResource {
        RegisteredResource {
            resource_id: id.to_string(),
            name: format!("Resource {id}"),
            description: Some("Test pension".to_string()),
            match_status: MatchStatus::MatchYes,
            resource_scopes: BTreeSet::from(["value".to_string(), "owner".to_string()]),
            rpt: Some(format!("rpt-{id}")),
            pat: Some(format!("pat-{id}")),
            friendly_name: friendly_name.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_resource_success() {
        let mut mock_repo = MockResourceRepository::new();

        let resource = create_test_resource("abc", None);
        mock_repo
            .expect_find_by_resource_id()
            .withf(|id| id == "abc")
            .times(1)
            .returning(move |_| Ok(Some(resource.clone())));

        let service = ResourceService::new(Arc::new(mock_repo));

        let result = service.get_resource("abc").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().rpt.as_deref(), Some("rpt-abc"));
    }

    #[tokio::test]
    async fn test_get_resource_not_found() {
        let mut mock_repo = MockResourceRepository::new();

        mock_repo
            .expect_find_by_resource_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ResourceService::new(Arc::new(mock_repo));

        let err = service.get_resource("missing-id").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Resource not found with ID: missing-id");
    }

    #[tokio::test]
    async fn test_list_resources() {
        let mut mock_repo = MockResourceRepository::new();

        let resources = vec![
            create_test_resource("a", Some("Seeded A")),
            create_test_resource("b", None),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(resources.clone()));

        let service = ResourceService::new(Arc::new(mock_repo));

        let list = service.list_resources().await.unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_dynamic_resources_only_passes_dynamic_subset() {
        let mut mock_repo = MockResourceRepository::new();

        let resources = vec![
            create_test_resource("fixture", Some("Seeded")),
            create_test_resource("dyn-none", None),
            create_test_resource("dyn-blank", Some("  ")),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(resources.clone()));

        mock_repo
            .expect_delete_all()
            .withf(|resources| {
                resources.len() == 2 && resources.iter().all(|r| r.resource_id != "fixture")
            })
            .times(1)
            .returning(|resources| Ok(resources.len() as u64));

        let service = ResourceService::new(Arc::new(mock_repo));

        let deleted = service.delete_dynamic_resources().await.unwrap();
        assert_eq!(deleted, 2);
    }

    #[tokio::test]
    async fn test_delete_dynamic_resources_skips_store_when_nothing_to_delete() {
        let mut mock_repo = MockResourceRepository::new();

        let resources = vec![create_test_resource("fixture", Some("Seeded"))];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(resources.clone()));
        mock_repo.expect_delete_all().never();

        let service = ResourceService::new(Arc::new(mock_repo));

        assert_eq!(service.delete_dynamic_resources().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_dynamic_resources_propagates_store_error() {
        let mut mock_repo = MockResourceRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(AppError::internal("connection refused", json!({}))));

        let service = ResourceService::new(Arc::new(mock_repo));

        let err = service.delete_dynamic_resources().await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_count_resources() {
        let mut mock_repo = MockResourceRepository::new();

        mock_repo.expect_count().times(1).returning(|| Ok(7));

        let service = ResourceService::new(Arc::new(mock_repo));

        assert_eq!(service.count_resources().await.unwrap(), 7);
    }
}
