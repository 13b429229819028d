//! Transcription infrastructure module

mod whisper_cli;

pub use whisper_cli::WhisperCliTranscriber;
