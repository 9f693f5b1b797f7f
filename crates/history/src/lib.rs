//! Project history: named configuration snapshots.
//!
//! The persistence collaborator for the configurator. A "project" is a named
//! snapshot saved explicitly by the user; the live session itself is never
//! durably persisted. Storage is a seam: the in-memory implementation plus
//! JSON export/import covers the browser-storage-like use case.

pub mod store;

pub use store::{InMemoryProjectStore, ProjectRecord, ProjectStore};
