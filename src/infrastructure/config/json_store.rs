//! JSON settings store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::SettingsStore;
use crate::domain::config::Settings;
use crate::domain::error::ConfigError;

/// Settings store reading a single JSON file under the XDG config dir.
///
/// Unlike a store with defaults, `load` fails when the file is missing:
/// the daemon cannot run without socket, file and service locations.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store at the default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("voxd");

        Self {
            path: config_dir.join("config.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_json(content: &str) -> Result<Settings, ConfigError> {
        let settings: Settings =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn to_json(settings: &Settings) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(settings).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for JsonSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", self.path.display(), e)))?;

        Self::parse_json(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_json(&Settings::example())?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = JsonSettingsStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("voxd"));
        assert!(path.to_string_lossy().contains("config.json"));
    }

    #[test]
    fn custom_path() {
        let store = JsonSettingsStore::with_path("/custom/path/config.json");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = JsonSettingsStore::parse_json("{ not json");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[tokio::test]
    async fn load_missing_file_is_a_read_error() {
        let store = JsonSettingsStore::with_path("/nonexistent/voxd/config.json");

        let result = store.load().await;
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[tokio::test]
    async fn init_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::with_path(dir.path().join("voxd/config.json"));

        store.init().await.unwrap();
        let settings = store.load().await.unwrap();

        assert_eq!(settings.presets[0].name, "Default");
        assert_eq!(settings.ollama_port, 11434);
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::with_path(dir.path().join("config.json"));

        store.init().await.unwrap();
        let result = store.init().await;

        assert!(matches!(result, Err(ConfigError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn load_rejects_an_empty_preset_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut settings = Settings::example();
        settings.presets.clear();
        tokio::fs::write(&path, serde_json::to_string(&settings).unwrap())
            .await
            .unwrap();

        let store = JsonSettingsStore::with_path(&path);
        let result = store.load().await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
