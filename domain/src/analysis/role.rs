//! Generation roles and their sampling temperatures

use serde::{Deserialize, Serialize};

/// The part a generation call plays in the pipeline.
///
/// Each role samples at its own temperature: analysis and scoring stay
/// conservative, while metaphors and domains run hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationRole {
    /// Cause identification and "why" expansion
    Analyst,
    /// Metaphor and solution generation
    Challenger,
    /// Solution scoring
    Evaluator,
    /// Knowledge domain generation
    Domain,
}

impl GenerationRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationRole::Analyst => "analyst",
            GenerationRole::Challenger => "challenger",
            GenerationRole::Evaluator => "evaluator",
            GenerationRole::Domain => "domain",
        }
    }

    pub fn default_temperature(&self) -> f32 {
        match self {
            GenerationRole::Analyst => 0.3,
            GenerationRole::Challenger => 0.8,
            GenerationRole::Evaluator => 0.2,
            GenerationRole::Domain => 0.9,
        }
    }
}

impl std::fmt::Display for GenerationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_is_coolest() {
        let roles = [
            GenerationRole::Analyst,
            GenerationRole::Challenger,
            GenerationRole::Domain,
        ];
        for role in roles {
            assert!(GenerationRole::Evaluator.default_temperature() < role.default_temperature());
        }
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&GenerationRole::Challenger).unwrap();
        assert_eq!(json, "\"challenger\"");
    }
}
