//! Repository trait for registered resources.

use crate::domain::entities::RegisteredResource;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the registered-resource store.
///
/// The test helpers never create or update resources, so the contract is
/// limited to reads and bulk deletion.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgResourceRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryResourceRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_resource.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Finds a resource by its resource ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_resource_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<RegisteredResource>, AppError>;

    /// Lists every stored resource, fixtures and dynamic ones alike.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<RegisteredResource>, AppError>;

    /// Deletes the given resources, matched by resource ID.
    ///
    /// Returns the number of records actually removed. Resources that are
    /// already gone are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self, resources: &[RegisteredResource]) -> Result<u64, AppError>;

    /// Counts stored resources.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
