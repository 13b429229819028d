//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, socket plumbing,
//! signal handling, and the daemon runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod daemon_app;
pub mod pid_file;
pub mod presenter;
pub mod send_cmd;
pub mod signals;
pub mod socket;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, CommandArg, Commands, ConfigAction};
pub use presenter::Presenter;
pub use socket::{ControlCommand, ControlSocketClient, ControlSocketServer};
