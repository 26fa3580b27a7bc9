//! Generate Solutions use case
//!
//! Sweeps every (leaf cause × domain × slot) combination of a cause tree and
//! produces one metaphor-inspired solution per combination.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use crate::use_cases::shared::GenerationClient;
use lateral_domain::{
    AnalysisStage, CauseNode, GenerationRole, PromptTemplate, Solution, truncate,
};
use tracing::{debug, info, warn};

/// Number of (leaf, domain, slot) combinations a sweep attempts.
pub fn planned_attempts(leaf_count: usize, domain_count: usize, solutions_per_domain: usize) -> usize {
    leaf_count
        .saturating_mul(domain_count)
        .saturating_mul(solutions_per_domain)
}

/// Input for the GenerateSolutions use case
#[derive(Debug, Clone, Copy)]
pub struct GenerateSolutionsInput<'a> {
    pub problem: &'a str,
    pub tree: &'a CauseNode,
    pub domains: &'a [String],
    /// Only the first `max_leaf_causes` leaves of the tree are used
    pub max_leaf_causes: usize,
    pub solutions_per_domain: usize,
}

/// Use case for the two-stage (metaphor, then solution) generation sweep
///
/// Iteration order is leaf (outer), domain (middle), slot (inner), and the
/// output preserves it. A combination whose metaphor or solution call fails
/// is skipped without producing a record.
pub struct GenerateSolutionsUseCase<G: TextGenerator + 'static> {
    client: GenerationClient<G>,
}

impl<G: TextGenerator + 'static> GenerateSolutionsUseCase<G> {
    pub fn new(client: GenerationClient<G>) -> Self {
        Self { client }
    }

    /// Execute the sweep with default (no-op) progress
    pub async fn execute(&self, input: GenerateSolutionsInput<'_>) -> Vec<Solution> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the sweep, reporting one task per attempted combination
    pub async fn execute_with_progress(
        &self,
        input: GenerateSolutionsInput<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<Solution> {
        let leaves = input.tree.truncated_leaves(input.max_leaf_causes);
        info!(
            "Generating solutions for {} leaf cause(s) across {} domain(s)",
            leaves.len(),
            input.domains.len()
        );

        let mut solutions = Vec::new();

        for leaf in &leaves {
            for domain in input.domains {
                for index in 1..=input.solutions_per_domain {
                    let label = format!("{} #{}: {}", domain, index, truncate(leaf, 40));

                    match self.generate_one(input.problem, leaf, domain, index).await {
                        Ok(solution) => {
                            debug!("Generated solution {}", label);
                            progress.on_task_complete(AnalysisStage::GenerateSolutions, &label, true);
                            solutions.push(solution);
                        }
                        Err(e) => {
                            warn!("Skipping solution {}: {}", label, e);
                            progress.on_task_complete(AnalysisStage::GenerateSolutions, &label, false);
                        }
                    }
                }
            }
        }

        solutions
    }

    /// Metaphor stage followed by solution stage for one combination
    async fn generate_one(
        &self,
        problem: &str,
        leaf: &str,
        domain: &str,
        index: usize,
    ) -> Result<Solution, GenerationError> {
        let metaphor = self
            .client
            .generate(
                "metaphor",
                GenerationRole::Challenger,
                &PromptTemplate::metaphor(domain),
            )
            .await?;

        let content = self
            .client
            .generate(
                "solution",
                GenerationRole::Challenger,
                &PromptTemplate::solution(problem, leaf, &metaphor, index),
            )
            .await?;

        Ok(Solution::new(leaf, domain, index, metaphor, content))
    }
}
