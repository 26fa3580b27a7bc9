//! Analysis configuration - sizes of each stage of an analysis run.

use crate::analysis::cause_tree::CAUSE_FAN_OUT;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Deepest cause tree an analysis may request.
pub const MAX_ROOT_CAUSE_DEPTH: usize = 6;

/// Upper bound on the worst-case number of generation calls per run.
pub const MAX_GENERATION_CALLS: usize = 2000;

/// Stage sizes for one analysis run (Value Object)
///
/// Defaults match a small exploratory run; [`AnalysisLevel`] offers larger
/// presets. Every field can be overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Knowledge domains to draw metaphors from
    pub num_domains: usize,
    /// Top-level causes to identify
    pub num_initial_causes: usize,
    /// How many times to ask "why" below each initial cause
    pub root_cause_depth: usize,
    /// Leaf causes per tree that receive solutions
    pub max_leaf_causes: usize,
    /// Solutions per (leaf cause, domain) pair
    pub solutions_per_domain: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_domains: 3,
            num_initial_causes: 2,
            root_cause_depth: 1,
            max_leaf_causes: 2,
            solutions_per_domain: 1,
        }
    }
}

impl AnalysisConfig {
    // ==================== Builder Methods ====================

    pub fn with_num_domains(mut self, n: usize) -> Self {
        self.num_domains = n;
        self
    }

    pub fn with_num_initial_causes(mut self, n: usize) -> Self {
        self.num_initial_causes = n;
        self
    }

    pub fn with_root_cause_depth(mut self, depth: usize) -> Self {
        self.root_cause_depth = depth;
        self
    }

    pub fn with_max_leaf_causes(mut self, n: usize) -> Self {
        self.max_leaf_causes = n;
        self
    }

    pub fn with_solutions_per_domain(mut self, n: usize) -> Self {
        self.solutions_per_domain = n;
        self
    }

    // ==================== Invariants ====================

    /// Most cause trees a run can build.
    ///
    /// When cause identification fails the whole fallback list is used, so
    /// the bound is the larger of the request and `fallback_causes`.
    pub fn max_cause_trees(&self, fallback_causes: usize) -> usize {
        if self.num_initial_causes == 0 {
            0
        } else {
            self.num_initial_causes.max(fallback_causes)
        }
    }

    /// Worst-case number of generation calls for this configuration.
    ///
    /// Assumes every "why" call returns the full fan-out, that cause
    /// identification may fall back to `fallback_causes` causes, and that
    /// domain generation falls back to at least one domain.
    pub fn estimated_generation_calls(&self, fallback_causes: usize) -> usize {
        let depth = self.root_cause_depth.min(MAX_ROOT_CAUSE_DEPTH) as u32;
        let fan_out = CAUSE_FAN_OUT;
        let trees = self.max_cause_trees(fallback_causes);

        // Internal nodes of a full tree: 1 + f + f^2 + ... + f^(depth-1)
        let why_calls_per_tree = (0..depth).fold(0usize, |acc, level| {
            acc.saturating_add(fan_out.saturating_pow(level))
        });
        let leaves_per_tree = fan_out
            .saturating_pow(depth)
            .min(self.max_leaf_causes);

        let triples = trees
            .saturating_mul(leaves_per_tree)
            .saturating_mul(self.num_domains.max(1))
            .saturating_mul(self.solutions_per_domain);

        // Zero-sized stages skip their call
        let listing_calls =
            usize::from(self.num_domains > 0) + usize::from(self.num_initial_causes > 0);

        // listing calls + why calls + (metaphor, solution, evaluation) per triple
        listing_calls
            .saturating_add(trees.saturating_mul(why_calls_per_tree))
            .saturating_add(triples.saturating_mul(3))
    }

    /// Check the configuration invariants against a fallback cause list of
    /// `fallback_causes` entries.
    pub fn validate(&self, fallback_causes: usize) -> Result<(), DomainError> {
        if self.root_cause_depth > MAX_ROOT_CAUSE_DEPTH {
            return Err(DomainError::InvalidConfig(format!(
                "root_cause_depth {} exceeds the maximum of {}",
                self.root_cause_depth, MAX_ROOT_CAUSE_DEPTH
            )));
        }

        let calls = self.estimated_generation_calls(fallback_causes);
        if calls > MAX_GENERATION_CALLS {
            return Err(DomainError::InvalidConfig(format!(
                "configuration may issue up to {} generation calls (limit {})",
                calls, MAX_GENERATION_CALLS
            )));
        }

        Ok(())
    }
}

/// Named analysis presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisLevel {
    /// Minimal run: one domain, shallow trees
    Fastest,
    /// Moderate breadth and depth (default)
    #[default]
    Balanced,
    /// Wider and deeper exploration
    Deepest,
}

impl AnalysisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisLevel::Fastest => "fastest",
            AnalysisLevel::Balanced => "balanced",
            AnalysisLevel::Deepest => "deepest",
        }
    }

    /// The stage sizes for this preset
    pub fn config(&self) -> AnalysisConfig {
        match self {
            AnalysisLevel::Fastest => AnalysisConfig {
                num_domains: 1,
                num_initial_causes: 2,
                root_cause_depth: 1,
                max_leaf_causes: 2,
                solutions_per_domain: 1,
            },
            AnalysisLevel::Balanced => AnalysisConfig {
                num_domains: 3,
                num_initial_causes: 3,
                root_cause_depth: 2,
                max_leaf_causes: 3,
                solutions_per_domain: 1,
            },
            AnalysisLevel::Deepest => AnalysisConfig {
                num_domains: 4,
                num_initial_causes: 4,
                root_cause_depth: 3,
                max_leaf_causes: 4,
                solutions_per_domain: 1,
            },
        }
    }
}

impl std::fmt::Display for AnalysisLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalysisLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fastest" | "fast" => Ok(AnalysisLevel::Fastest),
            "balanced" => Ok(AnalysisLevel::Balanced),
            "deepest" | "deep" => Ok(AnalysisLevel::Deepest),
            other => Err(format!("unknown analysis level: {}", other)),
        }
    }
}

impl From<AnalysisLevel> for AnalysisConfig {
    fn from(level: AnalysisLevel) -> Self {
        level.config()
    }
}
