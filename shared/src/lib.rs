//! Shared types for the menu admin dashboard
//!
//! Data models and pagination types shared between the admin core
//! and presentation crates. Model field names match the remote store's
//! document representation (camelCase where the documents use it).

pub mod models;
pub mod query;

// Re-exports
pub use query::PaginatedResponse;
pub use serde::{Deserialize, Serialize};
