//! Prompt domain
//!
//! Templates for the prompts issued at each stage of an analysis run.

mod template;

pub use template::PromptTemplate;
