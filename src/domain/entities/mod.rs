//! Core domain entities.
//!
//! Resources are created and updated by the registration and authorisation
//! flows of the stub. The test helpers only read them and delete the
//! dynamically created ones.
//!
//! # Entity Types
//!
//! - [`RegisteredResource`] - A registered protected resource with its tokens
//! - [`MatchStatus`] - How the resource was matched at registration time

pub mod resource;

pub use resource::{MatchStatus, RegisteredResource};
