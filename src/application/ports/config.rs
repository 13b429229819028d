//! Settings storage port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::Settings;
use crate::domain::error::ConfigError;

/// Port for settings storage
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load and validate settings from storage.
    async fn load(&self) -> Result<Settings, ConfigError>;

    /// Get the settings file path.
    fn path(&self) -> PathBuf;

    /// Check if the settings file exists.
    fn exists(&self) -> bool;

    /// Write an example settings file for the user to edit.
    /// Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
