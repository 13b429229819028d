//! Refinement infrastructure module

mod ollama;

pub use ollama::OllamaRefiner;
