//! Refinement port interface

use async_trait::async_trait;
use thiserror::Error;

/// Refinement errors
#[derive(Debug, Clone, Error)]
pub enum RefinerError {
    #[error("Refinement request failed: {0}")]
    RequestFailed(String),

    #[error("Refinement service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to parse refinement response: {0}")]
    ParseError(String),
}

/// Port for the text refinement service
#[async_trait]
pub trait Refiner: Send + Sync {
    /// Send `prompt` to `model` and return the generated text verbatim.
    async fn refine(&self, model: &str, prompt: &str) -> Result<String, RefinerError>;
}
