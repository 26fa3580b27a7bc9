//! Stages of an analysis run

use serde::{Deserialize, Serialize};

/// Stage of an analysis run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisStage {
    /// Pick the knowledge domains used for metaphors
    GenerateDomains,
    /// Identify the top-level causes of the problem
    IdentifyCauses,
    /// Ask "why" recursively below each cause
    BuildTrees,
    /// Metaphor + solution for every (leaf, domain, slot)
    GenerateSolutions,
    /// Score every solution and rank them
    EvaluateAndSort,
}

impl AnalysisStage {
    /// All stages in the order they run.
    pub const ALL: [AnalysisStage; 5] = [
        AnalysisStage::GenerateDomains,
        AnalysisStage::IdentifyCauses,
        AnalysisStage::BuildTrees,
        AnalysisStage::GenerateSolutions,
        AnalysisStage::EvaluateAndSort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::GenerateDomains => "generate_domains",
            AnalysisStage::IdentifyCauses => "identify_causes",
            AnalysisStage::BuildTrees => "build_trees",
            AnalysisStage::GenerateSolutions => "generate_solutions",
            AnalysisStage::EvaluateAndSort => "evaluate_and_sort",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisStage::GenerateDomains => "Generating knowledge domains",
            AnalysisStage::IdentifyCauses => "Identifying initial causes",
            AnalysisStage::BuildTrees => "Building root cause trees",
            AnalysisStage::GenerateSolutions => "Generating solutions",
            AnalysisStage::EvaluateAndSort => "Evaluating solutions",
        }
    }

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            AnalysisStage::GenerateDomains => 1,
            AnalysisStage::IdentifyCauses => 2,
            AnalysisStage::BuildTrees => 3,
            AnalysisStage::GenerateSolutions => 4,
            AnalysisStage::EvaluateAndSort => 5,
        }
    }
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
