//! HTTP request handlers for the test helper endpoints.

pub mod health;
pub mod resources;

pub use health::health_handler;
pub use resources::{delete_dynamic_resources_handler, resource_list_handler, rpt_token_handler};
