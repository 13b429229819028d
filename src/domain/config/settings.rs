//! Daemon settings value object

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::ConfigError;
use crate::domain::preset::Preset;

/// Conventional control socket location, used by the sender when no
/// settings file is available
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/voice.sock";

/// Daemon settings.
/// Loaded once at startup and immutable afterwards. Every key is required;
/// a missing key is a parse failure. The recorder has no configurable path
/// because it is invoked by fixed argv (ffmpeg) plus `audio_file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Control socket location
    pub socket_path: PathBuf,

    /// Where the recorder writes captured audio
    pub audio_file: PathBuf,

    /// Where the transcriber writes the plain-text transcript
    pub output_file: PathBuf,

    /// Speech-to-text binary (whisper.cpp CLI)
    pub whisper_path: PathBuf,

    /// Refinement service base URL, scheme included (e.g. "http://localhost")
    pub ollama_url: String,

    /// Refinement service port
    pub ollama_port: u16,

    /// Ordered preset list; must be non-empty
    pub presets: Vec<Preset>,
}

impl Settings {
    /// Validate invariants the type system cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::ValidationError {
                key: "presets".to_string(),
                message: "at least one preset is required".to_string(),
            });
        }
        Ok(())
    }

    /// Example settings written by `voxd config init`
    pub fn example() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            audio_file: PathBuf::from("/tmp/voxd-recording.wav"),
            output_file: PathBuf::from("/tmp/voxd-transcript.txt"),
            whisper_path: PathBuf::from("/usr/local/bin/whisper-cli"),
            ollama_url: "http://localhost".to_string(),
            ollama_port: 11434,
            presets: vec![Preset {
                name: "Default".to_string(),
                transcription_model: "/usr/local/share/whisper/ggml-base.bin".to_string(),
                language: "en".to_string(),
                refinement_model: "llama3.2".to_string(),
                refinement_prompt:
                    "Clean up the following transcript. Fix punctuation and casing, \
                     keep the wording:\n\n"
                        .to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SETTINGS: &str = r#"{
        "socket_path": "/tmp/voice.sock",
        "audio_file": "/tmp/rec.wav",
        "output_file": "/tmp/out.txt",
        "whisper_path": "/opt/whisper/main",
        "ollama_url": "http://localhost",
        "ollama_port": 11434,
        "presets": [
            {
                "name": "Default",
                "whisper_model": "/models/ggml-base.bin",
                "language": "en",
                "ollama_model": "llama3.2",
                "ollama_prompt": "Clean up: "
            },
            {
                "name": "German",
                "whisper_model": "/models/ggml-small.bin",
                "language": "de",
                "ollama_model": "mistral",
                "ollama_prompt": "Korrigiere: "
            }
        ]
    }"#;

    #[test]
    fn parses_full_settings_file() {
        let settings: Settings = serde_json::from_str(FULL_SETTINGS).unwrap();
        assert_eq!(settings.socket_path, PathBuf::from("/tmp/voice.sock"));
        assert_eq!(settings.audio_file, PathBuf::from("/tmp/rec.wav"));
        assert_eq!(settings.output_file, PathBuf::from("/tmp/out.txt"));
        assert_eq!(settings.whisper_path, PathBuf::from("/opt/whisper/main"));
        assert_eq!(settings.ollama_url, "http://localhost");
        assert_eq!(settings.ollama_port, 11434);
        assert_eq!(settings.presets.len(), 2);
        assert_eq!(settings.presets[1].language, "de");
    }

    #[test]
    fn missing_key_fails_to_parse() {
        let json = r#"{"socket_path": "/tmp/voice.sock"}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }

    #[test]
    fn empty_presets_fail_validation() {
        let mut settings: Settings = serde_json::from_str(FULL_SETTINGS).unwrap();
        settings.presets.clear();

        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("presets"));
    }

    #[test]
    fn example_settings_are_valid() {
        let settings = Settings::example();
        assert!(settings.validate().is_ok());

        // And survive a serialize/parse cycle with the contract field names
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("whisper_model"));
        let reparsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed.presets[0].name, "Default");
    }
}
