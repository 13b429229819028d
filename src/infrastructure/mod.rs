//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like FFmpeg, whisper.cpp,
//! Ollama and the desktop clipboard.

pub mod clipboard;
pub mod config;
pub mod notification;
pub mod recording;
pub mod refinement;
pub mod transcription;

// Re-export adapters
pub use clipboard::CommandClipboard;
pub use config::JsonSettingsStore;
pub use notification::NotifySendNotifier;
pub use recording::FfmpegRecorder;
pub use refinement::OllamaRefiner;
pub use transcription::WhisperCliTranscriber;
