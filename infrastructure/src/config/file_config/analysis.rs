//! Analysis configuration from TOML (`[analysis]` section)

use lateral_domain::{AnalysisConfig, AnalysisLevel};
use serde::{Deserialize, Serialize};

/// Raw analysis configuration from TOML
///
/// `level` picks a preset; any field set here overrides that preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    pub level: AnalysisLevel,
    pub num_domains: Option<usize>,
    pub num_initial_causes: Option<usize>,
    pub root_cause_depth: Option<usize>,
    pub max_leaf_causes: Option<usize>,
    pub solutions_per_domain: Option<usize>,
    /// Problem analyzed when none is given on the command line
    pub problem: Option<String>,
}

impl FileAnalysisConfig {
    /// Resolve the preset and apply the overrides
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        let mut config = self.level.config();
        if let Some(n) = self.num_domains {
            config = config.with_num_domains(n);
        }
        if let Some(n) = self.num_initial_causes {
            config = config.with_num_initial_causes(n);
        }
        if let Some(depth) = self.root_cause_depth {
            config = config.with_root_cause_depth(depth);
        }
        if let Some(n) = self.max_leaf_causes {
            config = config.with_max_leaf_causes(n);
        }
        if let Some(n) = self.solutions_per_domain {
            config = config.with_solutions_per_domain(n);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_without_overrides() {
        let config = FileAnalysisConfig {
            level: AnalysisLevel::Fastest,
            ..Default::default()
        };
        assert_eq!(config.to_analysis_config(), AnalysisLevel::Fastest.config());
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let config: FileAnalysisConfig =
            toml::from_str("level = \"deepest\"\nnum_domains = 1\nsolutions_per_domain = 2\n")
                .unwrap();
        let resolved = config.to_analysis_config();
        let preset = AnalysisLevel::Deepest.config();

        assert_eq!(resolved.num_domains, 1);
        assert_eq!(resolved.solutions_per_domain, 2);
        assert_eq!(resolved.num_initial_causes, preset.num_initial_causes);
        assert_eq!(resolved.root_cause_depth, preset.root_cause_depth);
        assert_eq!(resolved.max_leaf_causes, preset.max_leaf_causes);
    }
}
