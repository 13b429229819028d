//! whisper.cpp CLI transcriber adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Transcriber, TranscriberError};
use crate::domain::preset::Preset;

/// Transcriber shelling out to the whisper.cpp CLI.
///
/// Runs the binary with `-otxt`, which writes the transcript next to
/// the given output base with a `.txt` suffix appended. The base is the
/// transcript path with its extension stripped so the file lands
/// exactly where the pipeline expects it.
pub struct WhisperCliTranscriber {
    binary: PathBuf,
}

impl WhisperCliTranscriber {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Output base handed to `-of`; whisper appends `.txt` itself
    fn output_base(transcript: &Path) -> PathBuf {
        transcript.with_extension("")
    }

    fn build_args(audio: &Path, preset: &Preset, base: &Path) -> Vec<String> {
        vec![
            "-m".to_string(),
            preset.transcription_model.clone(),
            "-f".to_string(),
            audio.to_string_lossy().to_string(),
            "-l".to_string(),
            preset.language.clone(),
            "-otxt".to_string(),
            "-of".to_string(),
            base.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl Transcriber for WhisperCliTranscriber {
    async fn transcribe(
        &self,
        audio: &Path,
        preset: &Preset,
        transcript: &Path,
    ) -> Result<(), TranscriberError> {
        let base = Self::output_base(transcript);
        let args = Self::build_args(audio, preset, &base);

        // Whisper echoes the transcript on stdout; only the -otxt file
        // matters here.
        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TranscriberError::BinaryNotFound(self.binary.display().to_string())
                } else {
                    TranscriberError::SpawnFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("no stderr output");
            return Err(TranscriberError::Failed(format!(
                "{}: {}",
                output.status, detail
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> Preset {
        Preset {
            name: "Default".to_string(),
            transcription_model: "/models/ggml-base.en.bin".to_string(),
            language: "en".to_string(),
            refinement_model: "llama3".to_string(),
            refinement_prompt: "Clean up: ".to_string(),
        }
    }

    #[test]
    fn output_base_strips_the_extension() {
        let base = WhisperCliTranscriber::output_base(Path::new("/tmp/transcript.txt"));

        assert_eq!(base, PathBuf::from("/tmp/transcript"));
    }

    #[test]
    fn args_carry_model_language_and_base() {
        let args = WhisperCliTranscriber::build_args(
            Path::new("/tmp/recording.wav"),
            &preset(),
            Path::new("/tmp/transcript"),
        );

        assert_eq!(
            args,
            vec![
                "-m",
                "/models/ggml-base.en.bin",
                "-f",
                "/tmp/recording.wav",
                "-l",
                "en",
                "-otxt",
                "-of",
                "/tmp/transcript",
            ]
        );
    }

    #[tokio::test]
    async fn missing_binary_is_reported() {
        let transcriber = WhisperCliTranscriber::new(PathBuf::from("/nonexistent/whisper-cli"));

        let result = transcriber
            .transcribe(
                Path::new("/tmp/recording.wav"),
                &preset(),
                Path::new("/tmp/transcript.txt"),
            )
            .await;

        assert!(matches!(result, Err(TranscriberError::BinaryNotFound(_))));
    }
}
