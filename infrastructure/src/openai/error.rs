//! Error types for the OpenAI adapter

use lateral_application::GenerationError;
use lateral_domain::truncate;
use thiserror::Error;

/// Longest body excerpt kept in a status error
const BODY_EXCERPT_LEN: usize = 200;

/// Errors that can occur when talking to an OpenAI-compatible endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("API key not found (set {0} or provider.api_key)")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl OpenAiError {
    /// Build a status error, keeping only an excerpt of the body
    pub fn status(status: u16, body: &str) -> Self {
        OpenAiError::Status {
            status,
            body: truncate(body.trim(), BODY_EXCERPT_LEN),
        }
    }
}

impl From<OpenAiError> for GenerationError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::Timeout => GenerationError::Timeout,
            OpenAiError::Http(e) if e.is_timeout() => GenerationError::Timeout,
            other => GenerationError::backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = OpenAiError::status(503, "  overloaded \n");
        assert_eq!(error.to_string(), "HTTP 503: overloaded");
    }

    #[test]
    fn test_status_body_is_truncated() {
        let body = "x".repeat(1000);
        let OpenAiError::Status { body, .. } = OpenAiError::status(500, &body) else {
            panic!("expected status error");
        };
        assert!(body.chars().count() <= BODY_EXCERPT_LEN);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_conversion_to_generation_error() {
        assert_eq!(
            GenerationError::from(OpenAiError::Timeout),
            GenerationError::Timeout
        );
        assert_eq!(
            GenerationError::from(OpenAiError::status(429, "slow down")),
            GenerationError::Backend("HTTP 429: slow down".to_string())
        );
        assert_eq!(
            GenerationError::from(OpenAiError::MalformedResponse("no choices".to_string())),
            GenerationError::Backend("Malformed response: no choices".to_string())
        );
    }
}
