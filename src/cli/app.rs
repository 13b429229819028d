//! App runner: argument dispatch and exit codes

use std::process::ExitCode;

use clap::Parser;

use crate::infrastructure::JsonSettingsStore;

use super::args::{Cli, CommandArg, Commands};
use super::config_cmd::handle_config_command;
use super::daemon_app::run_daemon;
use super::presenter::Presenter;
use super::send_cmd::handle_send_command;
use super::socket::ControlCommand;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Parse arguments and run the selected mode
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let store = match &cli.config {
        Some(path) => JsonSettingsStore::with_path(path),
        None => JsonSettingsStore::new(),
    };

    match cli.command {
        Some(Commands::Send { command }) => {
            let command = ControlCommand::from(command.unwrap_or(CommandArg::Toggle));
            match handle_send_command(command, &store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e);
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Some(Commands::Config { action }) => {
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        None => run_daemon(&store).await,
    }
}
