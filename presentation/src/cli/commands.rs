//! CLI command definitions

use clap::{Parser, ValueEnum};
use lateral_domain::AnalysisLevel;
use std::path::PathBuf;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report: domains, cause trees and every solution
    Full,
    /// Ranked solution titles with scores
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for lateral_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => lateral_domain::OutputFormat::Full,
            OutputFormat::Summary => lateral_domain::OutputFormat::Summary,
            OutputFormat::Json => lateral_domain::OutputFormat::Json,
        }
    }
}

/// Analysis preset selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Fastest,
    Balanced,
    Deepest,
}

impl From<LevelArg> for AnalysisLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Fastest => AnalysisLevel::Fastest,
            LevelArg::Balanced => AnalysisLevel::Balanced,
            LevelArg::Deepest => AnalysisLevel::Deepest,
        }
    }
}

/// CLI arguments for lateral-thinking
#[derive(Parser, Debug)]
#[command(name = "lateral-thinking")]
#[command(author, version, about = "Root-cause trees and metaphor-driven solutions for hard problems")]
#[command(long_about = r#"
Lateral Thinking digs into a problem by repeatedly asking "why", then
cross-pollinates the deepest causes with unrelated knowledge domains.

The process has five stages:
1. Generate knowledge domains to borrow metaphors from
2. Identify the initial causes of the problem
3. Build a "why" tree below each cause
4. For every leaf cause and domain: find a metaphor, then a solution
5. Score every solution and rank them

Configuration files are loaded from (in priority order):
1. LATERAL_* environment variables (e.g. LATERAL_GENERATION__TIMEOUT_SECONDS=60)
2. --config <path>     Explicit config file
3. ./lateral.toml      Project-level config
4. ~/.config/lateral-thinking/config.toml   Global config

Example:
  lateral-thinking "Families in fast-growing cities struggle to afford fresh groceries near home"
  lateral-thinking --level deepest -o summary "..."
  lateral-thinking --domains 1 --depth 1 --transcript run.jsonl "..."
"#)]
pub struct Cli {
    /// The problem statement to analyze (defaults to analysis.problem from config)
    pub problem: Option<String>,

    /// Analysis preset (overrides the configured level)
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    /// Number of knowledge domains
    #[arg(long, value_name = "N")]
    pub domains: Option<usize>,

    /// Number of initial causes
    #[arg(long, value_name = "N")]
    pub causes: Option<usize>,

    /// Depth of each "why" tree
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Leaf causes per tree that receive solutions
    #[arg(long, value_name = "N")]
    pub max_leaves: Option<usize>,

    /// Solutions per (leaf cause, domain) pair
    #[arg(long, value_name = "N")]
    pub solutions_per_domain: Option<usize>,

    /// Output format (defaults to output.format from config, then full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of every generation call to PATH
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Also write diagnostic logs to daily files in DIR
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Skip the problem length check
    #[arg(long)]
    pub allow_any_length: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "lateral-thinking",
            "--level",
            "deepest",
            "--domains",
            "2",
            "--max-leaves",
            "1",
            "--solutions-per-domain",
            "3",
            "-o",
            "summary",
            "-vv",
            "Why is it hard?",
        ])
        .unwrap();

        assert_eq!(cli.problem.as_deref(), Some("Why is it hard?"));
        assert_eq!(cli.level, Some(LevelArg::Deepest));
        assert_eq!(cli.domains, Some(2));
        assert_eq!(cli.max_leaves, Some(1));
        assert_eq!(cli.solutions_per_domain, Some(3));
        assert_eq!(cli.output, Some(OutputFormat::Summary));
        assert_eq!(cli.verbose, 2);
        assert!(cli.causes.is_none());
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(Cli::try_parse_from(["lateral-thinking", "--depth", "-1", "p"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            lateral_domain::OutputFormat::from(OutputFormat::Json),
            lateral_domain::OutputFormat::Json
        );
        assert_eq!(AnalysisLevel::from(LevelArg::Fastest), AnalysisLevel::Fastest);
    }
}
