//! Process-local implementation of the resource repository.

use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::RegisteredResource;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

/// A resource store held in memory, in insertion order.
///
/// Selected with `RESOURCE_STORE=memory` when the helpers run without a
/// database, and used by the handler tests. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryResourceRepository {
    resources: RwLock<Vec<RegisteredResource>>,
}

impl InMemoryResourceRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory resource store");
        Self::default()
    }

    /// Creates a store pre-populated with `resources`.
    pub fn with_resources(resources: Vec<RegisteredResource>) -> Self {
        Self {
            resources: RwLock::new(resources),
        }
    }

    /// Stores a resource, replacing any existing one with the same ID.
    pub async fn insert(&self, resource: RegisteredResource) {
        let mut resources = self.resources.write().await;
        match resources
            .iter_mut()
            .find(|r| r.resource_id == resource.resource_id)
        {
            Some(existing) => *existing = resource,
            None => resources.push(resource),
        }
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_by_resource_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<RegisteredResource>, AppError> {
        let resources = self.resources.read().await;
        Ok(resources
            .iter()
            .find(|r| r.resource_id == resource_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<RegisteredResource>, AppError> {
        Ok(self.resources.read().await.clone())
    }

    async fn delete_all(&self, resources: &[RegisteredResource]) -> Result<u64, AppError> {
        let ids: HashSet<&str> = resources.iter().map(|r| r.resource_id.as_str()).collect();

        let mut stored = self.resources.write().await;
        let before = stored.len();
        stored.retain(|r| !ids.contains(r.resource_id.as_str()));

        Ok((before - stored.len()) as u64)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.resources.read().await.len() as i64)
    }
}
