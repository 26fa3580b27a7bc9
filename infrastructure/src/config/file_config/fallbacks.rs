//! Fallback configuration from TOML (`[fallbacks]` section)

use lateral_application::AnalysisFallbacks;
use serde::{Deserialize, Serialize};

/// Raw fallback lists from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFallbacksConfig {
    pub domains: Vec<String>,
    pub causes: Vec<String>,
    pub excluded_domains: Vec<String>,
}

impl Default for FileFallbacksConfig {
    fn default() -> Self {
        let fallbacks = AnalysisFallbacks::default();
        Self {
            domains: fallbacks.domains,
            causes: fallbacks.causes,
            excluded_domains: fallbacks.excluded_domains,
        }
    }
}

impl FileFallbacksConfig {
    pub fn to_fallbacks(&self) -> AnalysisFallbacks {
        AnalysisFallbacks::default()
            .with_domains(self.domains.clone())
            .with_causes(self.causes.clone())
            .with_excluded_domains(self.excluded_domains.clone())
    }
}
