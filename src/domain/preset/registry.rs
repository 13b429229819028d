//! Preset registry entity

use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

use super::Preset;

/// Error when selecting a preset index outside the configured range
#[derive(Debug, Clone, Error)]
#[error("Preset index {index} is out of range (have {count} presets)")]
pub struct PresetIndexError {
    pub index: usize,
    pub count: usize,
}

/// Registry of configured presets with the currently selected index.
///
/// `current()` hands out a copy of the selected preset, never a reference,
/// so a consumer holding a snapshot is isolated from later `select()` calls.
/// The settings loader guarantees the preset list is non-empty.
#[derive(Debug)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
    selected: AtomicUsize,
}

impl PresetRegistry {
    /// Create a registry with the first preset selected
    pub fn new(presets: Vec<Preset>) -> Self {
        Self {
            presets,
            selected: AtomicUsize::new(0),
        }
    }

    /// Switch the selected preset
    pub fn select(&self, index: usize) -> Result<(), PresetIndexError> {
        if index >= self.presets.len() {
            return Err(PresetIndexError {
                index,
                count: self.presets.len(),
            });
        }
        self.selected.store(index, Ordering::SeqCst);
        Ok(())
    }

    /// Get a copy of the currently selected preset
    pub fn current(&self) -> Preset {
        // select() bounds-checks every store, so the index is always valid.
        self.presets[self.selected.load(Ordering::SeqCst)].clone()
    }

    /// Get the currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected.load(Ordering::SeqCst)
    }

    /// Get all configured presets in order
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }
}
