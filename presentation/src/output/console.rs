//! Console output formatter for analysis results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use lateral_domain::{AnalysisResult, CauseNode, ScoreSet, Solution, single_line};

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete analysis report
    pub fn format(result: &AnalysisResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Lateral Thinking Analysis"));
        output.push('\n');

        // Problem
        output.push_str(&format!(
            "{} {}\n\n",
            "Problem:".cyan().bold(),
            result.problem
        ));

        // Domains
        output.push_str(&format!(
            "{} {}\n",
            "Domains:".cyan().bold(),
            result.domains.join(", ")
        ));

        // Cause trees
        output.push_str(&Self::section_header("Root Cause Trees"));
        if result.cause_trees.is_empty() {
            output.push_str(&format!("{}\n", "(no causes identified)".dimmed()));
        }
        for tree in &result.cause_trees {
            output.push('\n');
            output.push_str(&Self::render_tree(tree));
        }

        // Solutions
        output.push_str(&Self::section_header("Ranked Solutions"));
        if result.solutions.is_empty() {
            output.push_str(&format!("{}\n", "(no solutions were generated)".dimmed()));
        }
        for (rank, solution) in result.solutions.iter().enumerate() {
            output.push_str(&Self::render_solution(rank + 1, solution));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the ranked titles with scores (concise output)
    pub fn format_summary(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Lateral Thinking Summary ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Problem:".bold(), result.problem));

        if result.solutions.is_empty() {
            output.push_str("No solutions were generated.\n");
            return output;
        }

        for (rank, solution) in result.solutions.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {} {}\n    {} {} | {} {}\n",
                rank + 1,
                format!("[{:.1}]", solution.scores.overall).yellow(),
                solution.title().bold(),
                "domain:".dimmed(),
                solution.domain,
                "cause:".dimmed(),
                single_line(&solution.root_cause)
            ));
        }

        output
    }

    /// Render a cause tree with box-drawing connectors
    pub fn render_tree(tree: &CauseNode) -> String {
        let mut output = format!("{}\n", single_line(&tree.cause).bold());
        Self::render_children(tree, "", &mut output);
        output
    }

    fn render_children(node: &CauseNode, prefix: &str, output: &mut String) {
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { "└─ " } else { "├─ " };
            output.push_str(&format!(
                "{}{}{}\n",
                prefix,
                connector,
                single_line(&child.cause)
            ));

            let child_prefix = format!("{}{}", prefix, if last { "   " } else { "│  " });
            Self::render_children(child, &child_prefix, output);
        }
    }

    fn render_solution(rank: usize, solution: &Solution) -> String {
        let mut output = String::new();
        let sections = solution.sections();

        output.push_str(&format!(
            "\n{}\n",
            format!("── #{} {} ──", rank, solution.title()).yellow().bold()
        ));
        output.push_str(&format!(
            "{} {}  {} {}\n",
            "Domain:".cyan(),
            solution.domain,
            "Root cause:".cyan(),
            single_line(&solution.root_cause)
        ));
        output.push_str(&format!("{} {}\n", "Scores:".cyan(), Self::scores_line(&solution.scores)));

        if sections.is_unstructured() {
            output.push('\n');
            output.push_str(&Self::indent(sections.other.trim(), "  "));
            output.push('\n');
            return output;
        }

        for (label, text) in [
            ("Insight", &sections.insight),
            ("Solution", &sections.solution),
            ("Implementation", &sections.implementation),
        ] {
            if !text.is_empty() {
                output.push_str(&format!("\n{}\n", label.green().bold()));
                output.push_str(&Self::indent(text, "  "));
                output.push('\n');
            }
        }

        output
    }

    fn scores_line(scores: &ScoreSet) -> String {
        format!(
            "overall {:.1} (novelty {:.0}, feasibility {:.0}, impact {:.0}, relevance {:.0})",
            scores.overall, scores.novelty, scores.feasibility, scores.impact, scores.relevance
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &AnalysisResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &AnalysisResult) -> String {
        Self::format_json(result)
    }

    fn format_summary(&self, result: &AnalysisResult) -> String {
        Self::format_summary(result)
    }
}
