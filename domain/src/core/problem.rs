//! Problem statement value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Shortest problem statement the interactive front-ends accept.
pub const MIN_PROBLEM_LENGTH: usize = 75;

/// Longest problem statement the interactive front-ends accept.
pub const MAX_PROBLEM_LENGTH: usize = 300;

/// A problem statement to be analyzed (Value Object)
///
/// Always non-empty and trimmed. Length bounds are a presentation concern
/// and are checked separately via [`ProblemStatement::check_length`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemStatement {
    content: String,
}

impl ProblemStatement {
    /// Create a problem statement, rejecting blank input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            return Err(DomainError::EmptyProblem);
        }
        Ok(Self { content })
    }

    /// Verify that the statement length (in characters) lies in `min..=max`
    pub fn check_length(&self, min: usize, max: usize) -> Result<(), DomainError> {
        let len = self.content.chars().count();
        if len < min || len > max {
            return Err(DomainError::ProblemLength { len, min, max });
        }
        Ok(())
    }

    /// Get the statement text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ProblemStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for ProblemStatement {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        ProblemStatement::try_new(s)
    }
}

impl TryFrom<String> for ProblemStatement {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ProblemStatement::try_new(s)
    }
}
