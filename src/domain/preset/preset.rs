//! Preset value object

use serde::{Deserialize, Serialize};

/// A named bundle of transcription and refinement parameters.
/// Immutable once loaded from the settings file; the serde field names
/// follow the settings file contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name (uniqueness expected but not enforced)
    pub name: String,

    /// Path to the speech-to-text model file
    #[serde(rename = "whisper_model")]
    pub transcription_model: String,

    /// Language code passed to the transcriber (e.g. "en", "de")
    pub language: String,

    /// Model name sent to the refinement service
    #[serde(rename = "ollama_model")]
    pub refinement_model: String,

    /// Prefix prepended verbatim to the raw transcript to form the
    /// refinement prompt
    #[serde(rename = "ollama_prompt")]
    pub refinement_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_settings_field_names() {
        let json = r#"{
            "name": "Default",
            "whisper_model": "/models/ggml-base.bin",
            "language": "en",
            "ollama_model": "llama3.2",
            "ollama_prompt": "Clean up: "
        }"#;

        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.name, "Default");
        assert_eq!(preset.transcription_model, "/models/ggml-base.bin");
        assert_eq!(preset.language, "en");
        assert_eq!(preset.refinement_model, "llama3.2");
        assert_eq!(preset.refinement_prompt, "Clean up: ");
    }

    #[test]
    fn serializes_with_settings_field_names() {
        let preset = Preset {
            name: "Notes".to_string(),
            transcription_model: "/models/ggml-small.bin".to_string(),
            language: "de".to_string(),
            refinement_model: "mistral".to_string(),
            refinement_prompt: "Fix punctuation: ".to_string(),
        };

        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["whisper_model"], "/models/ggml-small.bin");
        assert_eq!(json["ollama_model"], "mistral");
        assert_eq!(json["ollama_prompt"], "Fix punctuation: ");
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{"name": "Broken", "language": "en"}"#;
        assert!(serde_json::from_str::<Preset>(json).is_err());
    }
}
