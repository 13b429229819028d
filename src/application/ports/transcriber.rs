//! Transcriber port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::preset::Preset;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriberError {
    #[error("Transcription binary not found: {0}")]
    BinaryNotFound(String),

    #[error("Failed to run transcriber: {0}")]
    SpawnFailed(String),

    #[error("Transcriber exited with an error: {0}")]
    Failed(String),
}

/// Port for the external speech-to-text process
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe `audio` using the model and language from `preset`,
    /// writing a plain-text transcript to `transcript`.
    async fn transcribe(
        &self,
        audio: &Path,
        preset: &Preset,
        transcript: &Path,
    ) -> Result<(), TranscriberError>;
}
