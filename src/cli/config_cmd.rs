//! Config command handler

use crate::application::ports::SettingsStore;
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: SettingsStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => {
            store.init().await?;
            presenter.success(&format!(
                "Settings file created at: {}",
                store.path().display()
            ));
            presenter.info("Edit it to point at your whisper.cpp binary and models");
            Ok(())
        }
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
    }
}
