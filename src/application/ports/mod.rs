//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod notifier;
pub mod recorder;
pub mod refiner;
pub mod transcriber;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::SettingsStore;
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use recorder::{Recorder, RecorderError};
pub use refiner::{Refiner, RefinerError};
pub use transcriber::{Transcriber, TranscriberError};
