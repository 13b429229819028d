//! Preset domain module

mod preset;
mod registry;

pub use preset::Preset;
pub use registry::{PresetIndexError, PresetRegistry};
