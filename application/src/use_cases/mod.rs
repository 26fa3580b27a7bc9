//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_cause_tree;
pub mod evaluate_solutions;
pub mod generate_solutions;
pub mod run_analysis;
pub mod shared;

#[cfg(test)]
pub(crate) mod testing;
