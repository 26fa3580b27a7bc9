//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GenerationParams`] - timeout, throttling delay and temperatures per call
//! - [`AnalysisFallbacks`] - substitute content for failed generation stages

pub mod fallbacks;
pub mod generation_params;

pub use fallbacks::AnalysisFallbacks;
pub use generation_params::{GenerationParams, RoleTemperatures};
