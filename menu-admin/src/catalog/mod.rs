//! Catalog core
//!
//! Live-cached read model ([`service::CatalogService`]), derived
//! filtered/sorted/paginated view with selection ([`view::CatalogView`]),
//! and edit reconciliation with image side effects
//! ([`editor::ItemEditor`]).

pub mod editor;
pub mod service;
pub mod view;

pub use editor::ItemEditor;
pub use service::CatalogService;
pub use view::{CatalogView, SortKey};
