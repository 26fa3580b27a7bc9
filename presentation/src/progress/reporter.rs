//! Progress reporting for analysis runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use lateral_application::ports::progress::ProgressNotifier;
use lateral_domain::{AnalysisStage, single_line, truncate};
use std::sync::Mutex;

/// Longest task label shown next to a bar
const LABEL_WIDTH: usize = 50;

fn short_label(label: &str) -> String {
    truncate(&single_line(label), LABEL_WIDTH)
}

/// Reports progress during an analysis with one bar per stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_prefix(stage: AnalysisStage) -> String {
        format!("Stage {}: {}", stage.number(), stage.display_name())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: AnalysisStage, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_prefix(stage));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _stage: AnalysisStage, label: &str, success: bool) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), short_label(label))
            } else {
                format!("{} {}", "x".red(), short_label(label))
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: AnalysisStage) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("Stage {} complete!", stage.number()).green().to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so reports on stdout stay clean.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: AnalysisStage, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::stage_prefix(stage).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _stage: AnalysisStage, label: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), short_label(label));
        } else {
            eprintln!("  {} {} (failed)", "x".red(), short_label(label));
        }
    }

    fn on_stage_complete(&self, _stage: AnalysisStage) {
        eprintln!();
    }
}
