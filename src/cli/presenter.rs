//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// Status lines go to stderr; stdout carries nothing but the final
/// transcription text, so the daemon output stays pipeable.
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the final transcription)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print daemon status
    pub fn daemon_status(&self, state: &str) {
        eprintln!("{} Daemon: {}", "●".cyan(), state);
    }

    /// Print a received control command
    pub fn received(&self, command: &str) {
        eprintln!("{} Received '{}'", "↓".cyan(), command);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
