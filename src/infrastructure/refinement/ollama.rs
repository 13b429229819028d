//! Ollama API refiner adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Refiner, RefinerError};

/// Ollama generate endpoint path
const GENERATE_PATH: &str = "/api/generate";

// Request types for the Ollama API

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

// Response types for the Ollama API

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    /// Generated text; an absent field reads as empty
    #[serde(default)]
    response: String,
}

/// Ollama API refiner
pub struct OllamaRefiner {
    base_url: String,
    port: u16,
    client: reqwest::Client,
}

impl OllamaRefiner {
    /// Create a refiner for an Ollama server at `base_url:port`
    pub fn new(base_url: impl Into<String>, port: u16) -> Self {
        Self {
            base_url: base_url.into(),
            port,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}:{}{}", self.base_url, self.port, GENERATE_PATH)
    }

    fn build_request(model: &str, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        }
    }
}

#[async_trait]
impl Refiner for OllamaRefiner {
    async fn refine(&self, model: &str, prompt: &str) -> Result<String, RefinerError> {
        let url = self.api_url();
        let body = Self::build_request(model, prompt);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RefinerError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RefinerError::HttpStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| RefinerError::ParseError(e.to_string()))?;

        Ok(response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_host_port_and_path() {
        let refiner = OllamaRefiner::new("http://localhost", 11434);

        assert_eq!(refiner.api_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn build_request_disables_streaming() {
        let request = OllamaRefiner::build_request("llama3.2", "Clean up: hello");

        assert_eq!(request.model, "llama3.2");
        assert_eq!(request.prompt, "Clean up: hello");
        assert!(!request.stream);
    }

    #[test]
    fn response_field_is_extracted() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"response": "Hello.", "done": true}"#).unwrap();

        assert_eq!(parsed.response, "Hello.");
    }

    #[test]
    fn missing_response_field_reads_as_empty() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();

        assert_eq!(parsed.response, "");
    }
}
