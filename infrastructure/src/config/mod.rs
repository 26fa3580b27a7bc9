//! Configuration file loading for lateral-thinking
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LATERAL_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./lateral.toml` or `./.lateral.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/lateral-thinking/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnalysisConfig, FileConfig, FileFallbacksConfig,
    FileGenerationConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileProviderConfig,
};
pub use loader::ConfigLoader;
