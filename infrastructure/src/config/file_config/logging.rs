//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every generation call
    pub transcript: Option<PathBuf>,
    /// Directory for daily-rolling diagnostic log files
    pub dir: Option<PathBuf>,
}
