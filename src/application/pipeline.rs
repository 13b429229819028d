//! Transcription pipeline use case

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::preset::Preset;

use super::ports::{
    Clipboard, ClipboardError, NotificationIcon, Notifier, Refiner, RefinerError, Transcriber,
    TranscriberError,
};

/// Errors from the pipeline stages
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriberError),

    #[error("Failed to read transcript: {0}")]
    TranscriptRead(String),

    #[error("Refinement failed: {0}")]
    Refinement(#[from] RefinerError),

    #[error("Clipboard copy failed: {0}")]
    Clipboard(#[from] ClipboardError),
}

impl PipelineError {
    /// Short stage-specific message shown in the desktop notification
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Transcription(_) => "Transcription failed",
            Self::TranscriptRead(_) => "Could not read the transcript file",
            Self::Refinement(_) => "Text refinement failed",
            Self::Clipboard(_) => "Could not copy text to clipboard",
        }
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineResult {
    /// Transcript as read back from the transcriber output, with embedded
    /// newlines flattened to spaces
    pub raw_transcript: String,

    /// Final text delivered to the clipboard
    pub refined_text: String,

    /// The failure that aborted the run, if any
    pub error: Option<PipelineError>,
}

impl PipelineResult {
    /// True when every stage ran to completion
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs the transcribe -> read -> refine -> publish sequence once per
/// completed recording.
///
/// Each stage gets a single attempt; the first failure aborts the run,
/// emits one error notification, and is recorded on the returned
/// [`PipelineResult`]. The clipboard is only written after every prior
/// stage has succeeded, so partial output never reaches it.
pub struct TranscriptionPipeline<T, F, C, N>
where
    T: Transcriber,
    F: Refiner,
    C: Clipboard,
    N: Notifier,
{
    transcriber: T,
    refiner: F,
    clipboard: C,
    notifier: N,
    audio_file: PathBuf,
    transcript_file: PathBuf,
}

impl<T, F, C, N> TranscriptionPipeline<T, F, C, N>
where
    T: Transcriber,
    F: Refiner,
    C: Clipboard,
    N: Notifier,
{
    /// Create a new pipeline over the given adapters and file locations
    pub fn new(
        transcriber: T,
        refiner: F,
        clipboard: C,
        notifier: N,
        audio_file: PathBuf,
        transcript_file: PathBuf,
    ) -> Self {
        Self {
            transcriber,
            refiner,
            clipboard,
            notifier,
            audio_file,
            transcript_file,
        }
    }

    /// Run all stages with the preset snapshot captured at recording start
    pub async fn run(&self, preset: &Preset) -> PipelineResult {
        let mut result = PipelineResult::default();

        // Stage 1: speech-to-text into the transcript file
        if let Err(err) = self
            .transcriber
            .transcribe(&self.audio_file, preset, &self.transcript_file)
            .await
        {
            return self.abort(result, PipelineError::Transcription(err)).await;
        }

        // Stage 2: read the transcript back
        let raw = match tokio::fs::read_to_string(&self.transcript_file).await {
            Ok(contents) => flatten_transcript(&contents),
            Err(err) => {
                return self
                    .abort(result, PipelineError::TranscriptRead(err.to_string()))
                    .await;
            }
        };
        result.raw_transcript = raw;

        // Stage 3: refine through the language model
        let prompt = format!("{}{}", preset.refinement_prompt, result.raw_transcript);
        match self
            .refiner
            .refine(&preset.refinement_model, &prompt)
            .await
        {
            Ok(text) => result.refined_text = normalize_refined(&text),
            Err(err) => return self.abort(result, PipelineError::Refinement(err)).await,
        }

        // Stage 4: publish to the clipboard
        if let Err(err) = self.clipboard.copy(&result.refined_text).await {
            return self.abort(result, PipelineError::Clipboard(err)).await;
        }

        let _ = self
            .notifier
            .notify(
                "Transcription",
                "Transcription complete!",
                NotificationIcon::Success,
            )
            .await;
        result
    }

    async fn abort(&self, mut result: PipelineResult, error: PipelineError) -> PipelineResult {
        let _ = self
            .notifier
            .notify("Error", error.user_message(), NotificationIcon::Error)
            .await;
        result.error = Some(error);
        result
    }
}

/// Strip the transcript and flatten embedded newlines to single spaces
fn flatten_transcript(contents: &str) -> String {
    contents.trim().replace('\n', " ")
}

/// Trim the refined text and strip each line while keeping line breaks
fn normalize_refined(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}
