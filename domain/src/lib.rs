//! Domain layer for lateral-thinking
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Cause Trees
//!
//! A problem is broken into initial causes, and each cause is expanded by
//! asking "why" a bounded number of times. Every node holds at most
//! [`CAUSE_FAN_OUT`] sub-causes. The deepest causes (leaves) are where
//! solutions are aimed.
//!
//! ## Lateral Solutions
//!
//! Each leaf cause is paired with unrelated knowledge domains. A metaphor is
//! drawn from the domain first, then applied to the cause to produce a
//! [`Solution`], which is finally scored into a [`ScoreSet`].

pub mod analysis;
pub mod config;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    cause_tree::{CAUSE_FAN_OUT, CauseNode},
    config::{AnalysisConfig, AnalysisLevel, MAX_GENERATION_CALLS, MAX_ROOT_CAUSE_DEPTH},
    parsing::{parse_lines, parse_scores, parse_solution_content},
    result::AnalysisResult,
    role::GenerationRole,
    solution::{ScoreSet, Solution, SolutionSections, UNSCORED_OVERALL},
    stage::AnalysisStage,
};
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    problem::{MAX_PROBLEM_LENGTH, MIN_PROBLEM_LENGTH, ProblemStatement},
    string::{single_line, truncate},
};
pub use prompt::PromptTemplate;
