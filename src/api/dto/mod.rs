//! Data Transfer Objects for API responses.
//!
//! Field names are camelCase and must stay stable: existing test suites
//! read them by name.

pub mod health;
pub mod resource;
