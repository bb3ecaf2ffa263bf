//! Menu Admin Core
//!
//! Backend-agnostic core of the menu admin dashboard: a live-cached
//! catalog read model with filtering/sorting/pagination, merge-upsert
//! edit reconciliation with image side effects, bulk deletion, and the
//! whole-document settings editors (categories, navigation labels,
//! randomizer slots, appearance).
//!
//! The remote backend is consumed through the capability traits in
//! [`store`]; [`store::memory`] provides in-process implementations for
//! tests and local runs.

pub mod auth;
pub mod catalog;
pub mod core;
pub mod error;
pub mod settings;
pub mod stats;
pub mod store;
pub mod utils;

// Re-exports
pub use error::{AdminError, AdminResult};
