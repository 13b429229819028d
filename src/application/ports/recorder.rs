//! Recorder port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Recorder errors
#[derive(Debug, Clone, Error)]
pub enum RecorderError {
    #[error("ffmpeg not found. Please install ffmpeg.")]
    FfmpegNotFound,

    #[error("Failed to start recorder: {0}")]
    StartFailed(String),

    #[error("Recording already in progress")]
    AlreadyRecording,

    #[error("No recording in progress")]
    NotRecording,

    #[error("Recorder did not exit within {0}s and was killed")]
    StopTimeout(u64),

    #[error("Failed to stop recorder: {0}")]
    StopFailed(String),
}

/// Port for the external audio capture process
#[async_trait]
pub trait Recorder: Send + Sync {
    /// Start capturing from the default input device to `output`,
    /// overwriting any existing file.
    async fn start(&self, output: &Path) -> Result<(), RecorderError>;

    /// Ask the capture process to finish and wait for it to exit.
    /// The wait is bounded; on expiry the process is force-killed and
    /// `StopTimeout` is returned.
    async fn stop(&self) -> Result<(), RecorderError>;

    /// Kill the capture process immediately, discarding the recording.
    /// Succeeds silently when nothing is running.
    async fn abort(&self) -> Result<(), RecorderError>;
}
