//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgResourceRepository`] - PostgreSQL storage shared with the stub
//! - [`InMemoryResourceRepository`] - Process-local store for tests and
//!   standalone runs

pub mod memory_resource_repository;
pub mod pg_resource_repository;

pub use memory_resource_repository::InMemoryResourceRepository;
pub use pg_resource_repository::PgResourceRepository;
