//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for analysis results
///
/// This is a domain concept representing how a finished report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report: domains, cause trees and every solution (default)
    #[default]
    Full,
    /// Ranked solution titles with scores
    Summary,
    /// JSON output
    Json,
}
