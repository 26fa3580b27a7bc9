//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod fallbacks;
mod generation;
mod logging;
mod output;
mod provider;

pub use analysis::FileAnalysisConfig;
pub use fallbacks::FileFallbacksConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;

use lateral_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("generation.timeout_seconds cannot be 0")]
    ZeroTimeout,

    #[error("generation.{role}_temperature must be between 0 and 2 (got {value})")]
    TemperatureOutOfRange { role: &'static str, value: f32 },

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("fallbacks.domains cannot be empty")]
    EmptyFallbackDomains,

    #[error("fallbacks.causes cannot be empty")]
    EmptyFallbackCauses,

    #[error("[analysis] {0}")]
    Analysis(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Pipeline sizing (level preset plus overrides)
    pub analysis: FileAnalysisConfig,
    /// Per-call timeout, delay and temperatures
    pub generation: FileGenerationConfig,
    /// Text generation endpoint
    pub provider: FileProviderConfig,
    /// Substitute domains and causes
    pub fallbacks: FileFallbacksConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript and log file locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.generation.validate()?;

        if self.provider.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.fallbacks.domains.is_empty() {
            return Err(ConfigValidationError::EmptyFallbackDomains);
        }
        if self.fallbacks.causes.is_empty() {
            return Err(ConfigValidationError::EmptyFallbackCauses);
        }

        self.analysis
            .to_analysis_config()
            .validate(self.fallbacks.causes.len())?;
        Ok(())
    }
}
