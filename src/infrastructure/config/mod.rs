//! Config infrastructure module

mod json_store;

pub use json_store::JsonSettingsStore;
