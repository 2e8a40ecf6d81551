//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ResourceRepository`] - Registered resource lookup and cleanup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod resource_repository;

pub use resource_repository::ResourceRepository;

#[cfg(test)]
pub use resource_repository::MockResourceRepository;
