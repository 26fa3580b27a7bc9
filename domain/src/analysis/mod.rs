//! Analysis subdomain: cause trees, solutions, scoring and run configuration.
//!
//! - [`cause_tree::CauseNode`] - bounded "why" tree for one initial cause
//! - [`solution::Solution`] / [`solution::ScoreSet`] - candidate solutions and their scores
//! - [`result::AnalysisResult`] - everything one run produced
//! - [`config::AnalysisConfig`] / [`config::AnalysisLevel`] - stage sizes and presets
//! - [`stage::AnalysisStage`] - the five pipeline stages
//! - [`role::GenerationRole`] - which temperature a call samples at
//! - [`parsing`] - tolerant parsers for generated text

pub mod cause_tree;
pub mod config;
pub mod parsing;
pub mod result;
pub mod role;
pub mod solution;
pub mod stage;
