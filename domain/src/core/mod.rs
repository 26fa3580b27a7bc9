//! Core domain concepts shared across all subdomains.
//!
//! - [`problem::ProblemStatement`] - a validated problem to analyze
//! - [`error::DomainError`] - domain-level errors
//! - [`string`] - UTF-8 safe string helpers for labels and log lines

pub mod error;
pub mod problem;
pub mod string;
