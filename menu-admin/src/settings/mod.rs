//! Settings editors
//!
//! Read-modify-write editors over the aggregate documents in the
//! `settings` collection. Every save rewrites the containing list or
//! document in full; two concurrent sessions editing the same aggregate
//! race, and the last full write wins. This matches the stored data's
//! consistency model and is accepted, not fixed.

pub mod appearance;
pub mod categories;
pub mod navigation;
pub mod randomizer;

pub use appearance::{AppearanceEditor, AppearanceImages};
pub use categories::CategoryEditor;
pub use navigation::NavigationEditor;
pub use randomizer::RandomizerEditor;
