//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),

    #[error("Problem statement cannot be empty")]
    EmptyProblem,

    #[error("Problem statement must be between {min} and {max} characters (got {len})")]
    ProblemLength { len: usize, min: usize, max: usize },
}

impl DomainError {
    /// Check if this error comes from configuration validation
    pub fn is_config_error(&self) -> bool {
        matches!(self, DomainError::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_length_display() {
        let error = DomainError::ProblemLength {
            len: 10,
            min: 75,
            max: 300,
        };
        assert_eq!(
            error.to_string(),
            "Problem statement must be between 75 and 300 characters (got 10)"
        );
    }

    #[test]
    fn test_is_config_error_check() {
        assert!(DomainError::InvalidConfig("depth".to_string()).is_config_error());
        assert!(!DomainError::EmptyProblem.is_config_error());
    }
}
