//! Fallback content used when a generation stage cannot produce its own.

use serde::{Deserialize, Serialize};

/// Substitute domains and causes for failed generation stages.
///
/// Injected into [`RunAnalysisUseCase`](crate::use_cases::run_analysis::RunAnalysisUseCase)
/// so tests and config files can override the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFallbacks {
    /// Used when domain generation fails or returns nothing
    pub domains: Vec<String>,
    /// Used when cause identification fails or returns nothing
    pub causes: Vec<String>,
    /// Domains the generator is asked to avoid
    pub excluded_domains: Vec<String>,
}

impl Default for AnalysisFallbacks {
    fn default() -> Self {
        Self {
            domains: vec![
                "Biology".to_string(),
                "Magical Realism".to_string(),
                "Game Theory".to_string(),
                "Neuroscience".to_string(),
                "Mycology".to_string(),
            ],
            causes: vec![
                "Market prioritizes profit over social needs".to_string(),
                "Regulatory barriers".to_string(),
            ],
            excluded_domains: vec![
                "Quantum physics".to_string(),
                "Astrophysics".to_string(),
                "Environmental science".to_string(),
            ],
        }
    }
}

impl AnalysisFallbacks {
    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_causes(mut self, causes: Vec<String>) -> Self {
        self.causes = causes;
        self
    }

    pub fn with_excluded_domains(mut self, excluded: Vec<String>) -> Self {
        self.excluded_domains = excluded;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_are_populated() {
        let fallbacks = AnalysisFallbacks::default();
        assert_eq!(fallbacks.domains.len(), 5);
        assert_eq!(fallbacks.causes.len(), 2);
        assert!(!fallbacks.excluded_domains.is_empty());
    }

    #[test]
    fn test_overrides() {
        let fallbacks = AnalysisFallbacks::default()
            .with_domains(vec!["Origami".to_string()])
            .with_causes(vec!["Habit".to_string()])
            .with_excluded_domains(vec![]);
        assert_eq!(fallbacks.domains, vec!["Origami"]);
        assert_eq!(fallbacks.causes, vec!["Habit"]);
        assert!(fallbacks.excluded_domains.is_empty());
    }
}
