//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::socket::ControlCommand;

/// voxd - push-to-talk voice typing for the Linux desktop
#[derive(Parser, Debug)]
#[command(name = "voxd")]
#[command(version)]
#[command(about = "Voice-to-text daemon: records on command, transcribes with whisper.cpp, \
cleans the text up with Ollama and puts it on the clipboard")]
#[command(long_about = None)]
pub struct Cli {
    /// Settings file to use instead of the default location
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand; without one the daemon starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a command to the running daemon
    Send {
        /// Command to send (defaults to toggle)
        #[arg(value_enum)]
        command: Option<CommandArg>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a settings file with example values
    Init,
    /// Show the settings file path
    Path,
}

/// Daemon control command for clap
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CommandArg {
    /// Start recording
    Start,
    /// Stop recording and run the pipeline
    Stop,
    /// Start if idle, stop if recording
    Toggle,
}

impl From<CommandArg> for ControlCommand {
    fn from(arg: CommandArg) -> Self {
        match arg {
            CommandArg::Start => ControlCommand::Start,
            CommandArg::Stop => ControlCommand::Stop,
            CommandArg::Toggle => ControlCommand::Toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn no_subcommand_means_daemon_mode() {
        let cli = Cli::parse_from(["voxd"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn send_without_command_leaves_the_default_open() {
        let cli = Cli::parse_from(["voxd", "send"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Send { command: None })
        ));
    }

    #[test]
    fn send_parses_each_command() {
        for (arg, expected) in [
            ("start", CommandArg::Start),
            ("stop", CommandArg::Stop),
            ("toggle", CommandArg::Toggle),
        ] {
            let cli = Cli::parse_from(["voxd", "send", arg]);
            assert!(matches!(
                cli.command,
                Some(Commands::Send { command: Some(c) }) if c == expected
            ));
        }
    }

    #[test]
    fn config_init_and_path_parse() {
        let cli = Cli::parse_from(["voxd", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));

        let cli = Cli::parse_from(["voxd", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        ));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["voxd", "send", "--config", "/tmp/alt.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/alt.json")));
    }

    #[test]
    fn command_arg_converts_to_control_command() {
        assert_eq!(ControlCommand::from(CommandArg::Start), ControlCommand::Start);
        assert_eq!(ControlCommand::from(CommandArg::Stop), ControlCommand::Stop);
        assert_eq!(
            ControlCommand::from(CommandArg::Toggle),
            ControlCommand::Toggle
        );
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
