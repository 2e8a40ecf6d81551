//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::resource_service::ResourceService`] - Resource lookup, listing and cleanup

pub mod services;
