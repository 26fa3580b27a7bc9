//! Text generation port
//!
//! Defines the interface for the text-completion backend.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a generation call
///
/// The pipeline treats both variants the same way: the failing step degrades
/// locally and the run continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Timeout")]
    Timeout,

    #[error("Backend error: {0}")]
    Backend(String),
}

impl GenerationError {
    pub fn backend(message: impl Into<String>) -> Self {
        GenerationError::Backend(message.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GenerationError::Timeout)
    }
}

/// Non-deterministic text completion backend
///
/// This port defines how the application layer asks for generated text.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt`, sampling at `temperature`.
    ///
    /// Implementations should give up after `timeout` and report
    /// [`GenerationError::Timeout`].
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        timeout: Duration,
    ) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(GenerationError::Timeout.to_string(), "Timeout");
        assert_eq!(
            GenerationError::backend("HTTP 500").to_string(),
            "Backend error: HTTP 500"
        );
    }

    #[test]
    fn test_is_timeout() {
        assert!(GenerationError::Timeout.is_timeout());
        assert!(!GenerationError::backend("x").is_timeout());
    }
}
