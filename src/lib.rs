//! # CAS Test Helpers
//!
//! Auxiliary HTTP endpoints over the registered-resource store of the
//! Consent & Authorisation stub. Test suites use them to read generated
//! tokens, list stored resources, clean up resources they created, and wait
//! for the stub to become ready.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Resource entity and repository trait
//! - **Application Layer** ([`application`]) - Service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! All under `/test-helpers`:
//!
//! - `GET    /rpt-token/{resourceId}`
//! - `GET    /resources`
//! - `DELETE /resources`
//! - `GET    /health`
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ResourceService;
    pub use crate::domain::entities::{MatchStatus, RegisteredResource};
    pub use crate::domain::repositories::ResourceRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
