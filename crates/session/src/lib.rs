//! Configurator session domain module.
//!
//! This crate contains the wizard's state machine: the mutable configuration
//! aggregate, its command/event vocabulary, the navigation engine over the
//! fixed step sequence, and the serializable snapshot used by the persistence
//! and order-submission collaborators. Pure deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod navigation;
pub mod session;
pub mod snapshot;
pub mod template;

pub use session::{EmbroideryPatch, EmbroideryState, Session, SessionCommand, SessionEvent};
pub use snapshot::ConfigSnapshot;
