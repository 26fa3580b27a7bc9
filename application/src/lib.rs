//! Application layer for lateral-thinking
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisFallbacks, GenerationParams, RoleTemperatures};
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    progress::{NoProgress, ProgressNotifier},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::build_cause_tree::BuildCauseTreeUseCase;
pub use use_cases::evaluate_solutions::{EvaluateSolutionsUseCase, rank_solutions};
pub use use_cases::generate_solutions::{
    GenerateSolutionsInput, GenerateSolutionsUseCase, planned_attempts,
};
pub use use_cases::run_analysis::{RunAnalysisError, RunAnalysisUseCase};
pub use use_cases::shared::GenerationClient;
