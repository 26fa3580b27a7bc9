//! Evaluate Solutions use case
//!
//! Scores each solution with one evaluator call, then ranks the list.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::GenerationClient;
use lateral_domain::{AnalysisStage, GenerationRole, PromptTemplate, Solution, parse_scores};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Sort solutions by overall score, highest first.
///
/// The sort is stable: solutions with equal scores keep their input order.
pub fn rank_solutions(solutions: &mut [Solution]) {
    solutions.sort_by(|a, b| {
        b.scores
            .overall
            .partial_cmp(&a.scores.overall)
            .unwrap_or(Ordering::Equal)
    });
}

/// Use case for scoring and ranking generated solutions
///
/// A solution whose evaluation call fails keeps the scores it came in with.
pub struct EvaluateSolutionsUseCase<G: TextGenerator + 'static> {
    client: GenerationClient<G>,
}

impl<G: TextGenerator + 'static> EvaluateSolutionsUseCase<G> {
    pub fn new(client: GenerationClient<G>) -> Self {
        Self { client }
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, problem: &str, solutions: Vec<Solution>) -> Vec<Solution> {
        self.execute_with_progress(problem, solutions, &NoProgress)
            .await
    }

    /// Evaluate every solution in input order, then rank the result
    pub async fn execute_with_progress(
        &self,
        problem: &str,
        solutions: Vec<Solution>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<Solution> {
        info!("Evaluating {} solution(s)", solutions.len());

        let mut evaluated = Vec::with_capacity(solutions.len());
        for solution in solutions {
            let label = solution.title();
            let prompt =
                PromptTemplate::evaluation(problem, &solution.root_cause, &solution.content_text);

            match self
                .client
                .generate("evaluation", GenerationRole::Evaluator, &prompt)
                .await
            {
                Ok(response) => {
                    let scores = parse_scores(&response);
                    debug!(overall = scores.overall, "Scored '{}'", label);
                    progress.on_task_complete(AnalysisStage::EvaluateAndSort, &label, true);
                    evaluated.push(solution.with_scores(scores));
                }
                Err(e) => {
                    warn!("Keeping prior scores for '{}': {}", label, e);
                    progress.on_task_complete(AnalysisStage::EvaluateAndSort, &label, false);
                    evaluated.push(solution);
                }
            }
        }

        rank_solutions(&mut evaluated);
        evaluated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationParams;
    use crate::use_cases::testing::ScriptedGenerator;
    use lateral_domain::{ScoreSet, UNSCORED_OVERALL};
    use std::sync::Arc;

    fn use_case(generator: &Arc<ScriptedGenerator>) -> EvaluateSolutionsUseCase<ScriptedGenerator> {
        EvaluateSolutionsUseCase::new(GenerationClient::new(
            Arc::clone(generator),
            GenerationParams::unthrottled(),
        ))
    }

    fn solution(cause: &str, content: &str) -> Solution {
        Solution::new(cause, "Biology", 1, "METAPHOR: Hive", content)
    }

    fn scored(cause: &str, overall: f64) -> Solution {
        solution(cause, "text").with_scores(ScoreSet {
            overall,
            ..Default::default()
        })
    }

    fn causes(solutions: &[Solution]) -> Vec<&str> {
        solutions.iter().map(|s| s.root_cause.as_str()).collect()
    }

    // ==================== Ranking Tests ====================

    #[test]
    fn test_rank_descending() {
        let mut solutions = vec![scored("a", 3.0), scored("b", 9.0), scored("c", 6.5)];
        rank_solutions(&mut solutions);
        assert_eq!(causes(&solutions), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let mut solutions = vec![
            scored("first", 5.0),
            scored("high", 8.0),
            scored("second", 5.0),
            scored("third", 5.0),
        ];
        rank_solutions(&mut solutions);
        assert_eq!(causes(&solutions), vec!["high", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        let mut solutions: Vec<Solution> = Vec::new();
        rank_solutions(&mut solutions);
        assert!(solutions.is_empty());
    }

    // ==================== Evaluation Tests ====================

    #[tokio::test]
    async fn test_scores_replaced_from_response() {
        let generator = Arc::new(ScriptedGenerator::new());
        let result = use_case(&generator)
            .execute("P", vec![solution("Cause", "SOLUTION TITLE: Swarm")])
            .await;

        assert_eq!(result.len(), 1);
        let scores = result[0].scores;
        assert_eq!(scores.novelty, 7.0);
        assert_eq!(scores.feasibility, 8.0);
        assert_eq!(scores.impact, 6.0);
        assert_eq!(scores.relevance, 9.0);
        assert_eq!(scores.overall, 7.5);
        assert_eq!(generator.temperatures(), vec![0.2]);
    }

    #[tokio::test]
    async fn test_explicit_overall_is_kept() {
        let generator = Arc::new(ScriptedGenerator::new().on(
            "Score the solution",
            "NOVELTY: 2\nFEASIBILITY: 2\nIMPACT: 2\nRELEVANCE: 2\nOVERALL: 9",
        ));
        let result = use_case(&generator)
            .execute("P", vec![solution("Cause", "idea")])
            .await;

        assert_eq!(result[0].scores.overall, 9.0);
    }

    #[tokio::test]
    async fn test_failed_evaluation_keeps_sentinel() {
        let generator = Arc::new(ScriptedGenerator::new().fail_on("root cause: 'Broken'"));
        let result = use_case(&generator)
            .execute(
                "P",
                vec![solution("Broken", "idea one"), solution("Fine", "idea two")],
            )
            .await;

        assert_eq!(causes(&result), vec!["Fine", "Broken"]);
        assert_eq!(result[1].scores, ScoreSet::unscored());
        assert_eq!(result[1].scores.overall, UNSCORED_OVERALL);
        assert_eq!(generator.count_containing("Score the solution"), 2);
    }

    #[tokio::test]
    async fn test_sentinel_interleaves_stably_with_real_five() {
        let generator = Arc::new(
            ScriptedGenerator::new()
                .fail_on("root cause: 'Unscored'")
                .on("root cause: 'Scored'", "NOVELTY: 5\nFEASIBILITY: 5\nIMPACT: 5\nRELEVANCE: 5"),
        );
        let result = use_case(&generator)
            .execute(
                "P",
                vec![solution("Unscored", "a"), solution("Scored", "b")],
            )
            .await;

        assert_eq!(result[0].scores.overall, 5.0);
        assert_eq!(result[1].scores.overall, 5.0);
        assert_eq!(causes(&result), vec!["Unscored", "Scored"]);
    }

    #[tokio::test]
    async fn test_unparseable_response_yields_zero_scores() {
        let generator =
            Arc::new(ScriptedGenerator::new().on("Score the solution", "I cannot score this."));
        let result = use_case(&generator)
            .execute("P", vec![solution("Cause", "idea")])
            .await;

        assert_eq!(result[0].scores, ScoreSet::default());
    }
}
