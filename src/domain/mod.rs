//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod preset;
pub mod session;

// Re-export common types
pub use config::{Settings, DEFAULT_SOCKET_PATH};
pub use error::*;
pub use preset::{Preset, PresetIndexError, PresetRegistry};
pub use session::{InvalidStateTransition, RecordingSession, SessionState};
