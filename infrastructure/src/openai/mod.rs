//! OpenAI-compatible adapter
//!
//! Implements TextGenerator over the `/chat/completions` HTTP endpoint.

pub mod error;
pub mod generator;
pub mod protocol;
