//! Output formatter trait

use lateral_domain::AnalysisResult;

/// Trait for formatting analysis results
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, result: &AnalysisResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &AnalysisResult) -> String;

    /// Format the ranked solution list only (concise output)
    fn format_summary(&self, result: &AnalysisResult) -> String;
}
