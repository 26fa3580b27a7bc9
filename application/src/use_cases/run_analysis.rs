//! Run Analysis use case
//!
//! Orchestrates the full five-stage lateral-thinking pipeline.

use crate::config::{AnalysisFallbacks, GenerationParams};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::build_cause_tree::BuildCauseTreeUseCase;
use crate::use_cases::evaluate_solutions::EvaluateSolutionsUseCase;
use crate::use_cases::generate_solutions::{
    GenerateSolutionsInput, GenerateSolutionsUseCase, planned_attempts,
};
use crate::use_cases::shared::GenerationClient;
use lateral_domain::{
    AnalysisConfig, AnalysisResult, AnalysisStage, CauseNode, DomainError, GenerationRole,
    ProblemStatement, PromptTemplate, parse_lines, truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can stop an analysis before it starts
///
/// Backend failures never surface here; they degrade the result instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunAnalysisError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[source] DomainError),

    #[error("Invalid problem: {0}")]
    InvalidProblem(#[source] DomainError),
}

/// Use case for running a complete analysis
///
/// Stages run strictly in order: domains, causes, trees, solutions, then
/// evaluation. Every generation call is awaited before the next one starts.
pub struct RunAnalysisUseCase<G: TextGenerator + 'static> {
    generator: Arc<G>,
    params: GenerationParams,
    fallbacks: AnalysisFallbacks,
    logger: Arc<dyn GenerationLogger>,
}

impl<G: TextGenerator + 'static> RunAnalysisUseCase<G> {
    pub fn new(generator: Arc<G>, params: GenerationParams) -> Self {
        Self {
            generator,
            params,
            fallbacks: AnalysisFallbacks::default(),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Record every generation exchange to `logger`
    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the built-in fallback domains and causes
    pub fn with_fallbacks(mut self, fallbacks: AnalysisFallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Run the analysis with default (no-op) progress
    pub async fn analyze(
        &self,
        problem: &str,
        config: &AnalysisConfig,
    ) -> Result<AnalysisResult, RunAnalysisError> {
        self.analyze_with_progress(problem, config, &NoProgress)
            .await
    }

    /// Run the analysis with progress callbacks
    pub async fn analyze_with_progress(
        &self,
        problem: &str,
        config: &AnalysisConfig,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnalysisResult, RunAnalysisError> {
        let fallback_causes = self.fallbacks.causes.len();
        config
            .validate(fallback_causes)
            .map_err(RunAnalysisError::InvalidConfig)?;
        let problem = ProblemStatement::try_new(problem)
            .map_err(RunAnalysisError::InvalidProblem)?;
        let problem = problem.content();

        info!(
            estimated_calls = config.estimated_generation_calls(fallback_causes),
            "Starting analysis: {}",
            truncate(problem, 80)
        );
        self.logger.log(GenerationEvent::new(
            "analysis_started",
            serde_json::json!({
                "problem": problem,
                "config": config,
            }),
        ));

        let client = GenerationClient::new(Arc::clone(&self.generator), self.params.clone())
            .with_logger(Arc::clone(&self.logger));

        // Stage 1: Domains
        let domains = self
            .stage_domains(&client, config.num_domains, progress)
            .await;

        // Stage 2: Initial causes
        let causes = self
            .stage_causes(&client, problem, config.num_initial_causes, progress)
            .await;

        // Stage 3: Cause trees
        let cause_trees = self
            .stage_trees(&client, problem, &causes, config.root_cause_depth, progress)
            .await;

        // Stage 4: Solutions
        let solutions = {
            let stage = AnalysisStage::GenerateSolutions;
            info!("Stage {}: {}", stage.number(), stage.display_name());

            let total = cause_trees
                .iter()
                .map(|tree| {
                    let leaves = tree.extract_leaves().len().min(config.max_leaf_causes);
                    planned_attempts(leaves, domains.len(), config.solutions_per_domain)
                })
                .sum();
            progress.on_stage_start(stage, total);

            let generate = GenerateSolutionsUseCase::new(client.clone());
            let mut solutions = Vec::new();
            for tree in &cause_trees {
                let generated = generate
                    .execute_with_progress(
                        GenerateSolutionsInput {
                            problem,
                            tree,
                            domains: &domains,
                            max_leaf_causes: config.max_leaf_causes,
                            solutions_per_domain: config.solutions_per_domain,
                        },
                        progress,
                    )
                    .await;
                solutions.extend(generated);
            }

            progress.on_stage_complete(stage);
            solutions
        };

        // Stage 5: Evaluate and rank
        let solutions = {
            let stage = AnalysisStage::EvaluateAndSort;
            info!("Stage {}: {}", stage.number(), stage.display_name());
            progress.on_stage_start(stage, solutions.len());

            let ranked = EvaluateSolutionsUseCase::new(client)
                .execute_with_progress(problem, solutions, progress)
                .await;

            progress.on_stage_complete(stage);
            ranked
        };

        let result = AnalysisResult::new(problem, domains, cause_trees, solutions);
        info!(
            "Analysis complete: {} domain(s), {} tree(s), {} solution(s)",
            result.domains.len(),
            result.cause_trees.len(),
            result.solutions.len()
        );
        self.logger.log(GenerationEvent::new(
            "analysis_completed",
            serde_json::json!({
                "domains": result.domains,
                "trees": result.cause_trees.len(),
                "solutions": result.solutions.len(),
                "top_score": result.top_solution().map(|s| s.scores.overall),
            }),
        ));

        Ok(result)
    }

    /// Stage 1: one call for domain names, falling back to the fixed list
    ///
    /// Never returns an empty list unless the fallback list is empty. A
    /// request for zero domains skips the call and takes the first fallback.
    async fn stage_domains(
        &self,
        client: &GenerationClient<G>,
        num_domains: usize,
        progress: &dyn ProgressNotifier,
    ) -> Vec<String> {
        let stage = AnalysisStage::GenerateDomains;
        info!("Stage {}: {}", stage.number(), stage.display_name());

        if num_domains == 0 {
            let domains: Vec<String> = self.fallbacks.domains.iter().take(1).cloned().collect();
            debug!("No domains requested, using {}", domains.join(", "));
            progress.on_stage_start(stage, 0);
            progress.on_stage_complete(stage);
            return domains;
        }
        progress.on_stage_start(stage, 1);

        let prompt = PromptTemplate::domains(num_domains, &self.fallbacks.excluded_domains);
        let generated: Vec<String> = match client
            .generate("domains", GenerationRole::Domain, &prompt)
            .await
        {
            Ok(response) => parse_lines(&response)
                .into_iter()
                .take(num_domains)
                .collect(),
            Err(_) => Vec::new(),
        };

        let success = !generated.is_empty();
        let domains = if success {
            generated
        } else {
            warn!("Domain generation produced nothing, using fallback domains");
            self.fallbacks
                .domains
                .iter()
                .take(num_domains)
                .cloned()
                .collect()
        };
        debug!("Domains: {}", domains.join(", "));

        progress.on_task_complete(stage, &domains.join(", "), success);
        progress.on_stage_complete(stage);
        domains
    }

    /// Stage 2: one call for the top-level causes, hard-truncated
    async fn stage_causes(
        &self,
        client: &GenerationClient<G>,
        problem: &str,
        num_causes: usize,
        progress: &dyn ProgressNotifier,
    ) -> Vec<String> {
        let stage = AnalysisStage::IdentifyCauses;
        info!("Stage {}: {}", stage.number(), stage.display_name());

        if num_causes == 0 {
            debug!("No initial causes requested");
            progress.on_stage_start(stage, 0);
            progress.on_stage_complete(stage);
            return Vec::new();
        }
        progress.on_stage_start(stage, 1);

        let prompt = PromptTemplate::initial_causes(problem, num_causes);
        let generated: Vec<String> = match client
            .generate("causes", GenerationRole::Analyst, &prompt)
            .await
        {
            Ok(response) => parse_lines(&response)
                .into_iter()
                .take(num_causes)
                .collect(),
            Err(_) => Vec::new(),
        };

        let success = !generated.is_empty();
        let causes = if success {
            generated
        } else {
            warn!("Cause identification produced nothing, using fallback causes");
            self.fallbacks.causes.clone()
        };

        progress.on_task_complete(stage, &format!("{} cause(s)", causes.len()), success);
        progress.on_stage_complete(stage);
        causes
    }

    /// Stage 3: one tree per cause, built sequentially
    async fn stage_trees(
        &self,
        client: &GenerationClient<G>,
        problem: &str,
        causes: &[String],
        depth: usize,
        progress: &dyn ProgressNotifier,
    ) -> Vec<CauseNode> {
        let stage = AnalysisStage::BuildTrees;
        info!("Stage {}: {}", stage.number(), stage.display_name());
        progress.on_stage_start(stage, causes.len());

        let builder = BuildCauseTreeUseCase::new(client.clone());
        let mut trees = Vec::with_capacity(causes.len());
        for cause in causes {
            let tree = builder.execute(problem, cause, depth).await;
            debug!(
                nodes = tree.node_count(),
                leaves = tree.extract_leaves().len(),
                "Built tree for '{}'",
                truncate(cause, 60)
            );
            progress.on_task_complete(stage, &truncate(cause, 60), true);
            trees.push(tree);
        }

        progress.on_stage_complete(stage);
        trees
    }
}
