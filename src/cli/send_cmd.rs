//! Send command handler - forwards a control command to the daemon

use std::path::PathBuf;

use crate::application::ports::SettingsStore;
use crate::domain::config::DEFAULT_SOCKET_PATH;

use super::presenter::Presenter;
use super::socket::{ControlCommand, ControlSocketClient};

/// Resolve the daemon's socket path. The sender works without a
/// readable settings file by falling back to the conventional location,
/// so hotkey bindings stay one short command.
pub async fn resolve_socket_path<S: SettingsStore>(store: &S) -> PathBuf {
    match store.load().await {
        Ok(settings) => settings.socket_path,
        Err(_) => PathBuf::from(DEFAULT_SOCKET_PATH),
    }
}

/// Handle the send subcommand
pub async fn handle_send_command<S: SettingsStore>(
    command: ControlCommand,
    store: &S,
    presenter: &Presenter,
) -> Result<(), String> {
    let socket_path = resolve_socket_path(store).await;
    let client = ControlSocketClient::new(&socket_path);

    if !client.is_daemon_running() {
        return Err(format!(
            "No daemon running (socket not found at {}). Start it with: voxd",
            socket_path.display()
        ));
    }

    client
        .send(command)
        .await
        .map_err(|e| format!("Failed to reach the daemon: {}", e))?;

    presenter.info(&format!("Sent '{}'", command.as_str()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::JsonSettingsStore;

    #[tokio::test]
    async fn socket_path_comes_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut settings = crate::domain::config::Settings::example();
        settings.socket_path = PathBuf::from("/tmp/custom-voxd.sock");
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

        let store = JsonSettingsStore::with_path(&path);
        assert_eq!(
            resolve_socket_path(&store).await,
            PathBuf::from("/tmp/custom-voxd.sock")
        );
    }

    #[tokio::test]
    async fn missing_settings_fall_back_to_the_default_socket() {
        let store = JsonSettingsStore::with_path("/nonexistent/voxd/config.json");

        assert_eq!(
            resolve_socket_path(&store).await,
            PathBuf::from(DEFAULT_SOCKET_PATH)
        );
    }

    #[tokio::test]
    async fn send_fails_when_no_daemon_is_listening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut settings = crate::domain::config::Settings::example();
        settings.socket_path = dir.path().join("absent.sock");
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

        let store = JsonSettingsStore::with_path(&path);
        let presenter = Presenter::new();

        let result = handle_send_command(ControlCommand::Toggle, &store, &presenter).await;

        let err = result.unwrap_err();
        assert!(err.contains("No daemon running"), "got: {}", err);
    }
}
