//! Infrastructure layer for lateral-thinking
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnalysisConfig, FileConfig, FileFallbacksConfig,
    FileGenerationConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileProviderConfig,
};
pub use logging::JsonlGenerationLogger;
pub use openai::{
    error::OpenAiError,
    generator::{OpenAiConfig, OpenAiTextGenerator},
};
