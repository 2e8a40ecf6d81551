//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ResourceService;
use crate::domain::repositories::ResourceRepository;

/// Default name reported by the health endpoint.
pub const DEFAULT_SERVICE_NAME: &str = "Consent & Authorisation Stub";

#[derive(Clone)]
pub struct AppState {
    pub resource_service: Arc<ResourceService>,
    pub service_name: Arc<str>,
}

impl AppState {
    /// Builds state around any resource store.
    pub fn new(repository: Arc<dyn ResourceRepository>, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            resource_service: Arc::new(ResourceService::new(repository)),
            service_name: service_name.into(),
        }
    }
}
