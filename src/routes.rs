//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/test-helpers/*` - Test helper endpoints (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Base path under which every helper endpoint is served.
pub const TEST_HELPERS_BASE_PATH: &str = "/test-helpers";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest(TEST_HELPERS_BASE_PATH, api::routes::test_helper_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
