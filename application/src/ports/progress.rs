//! Progress notification port
//!
//! Defines the interface for reporting progress during an analysis run.

use lateral_domain::AnalysisStage;

/// Callback for progress updates during an analysis run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts with the number of tasks it will attempt
    fn on_stage_start(&self, stage: AnalysisStage, total_tasks: usize);

    /// Called when a task within a stage finishes
    fn on_task_complete(&self, stage: AnalysisStage, label: &str, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: AnalysisStage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: AnalysisStage, _total_tasks: usize) {}
    fn on_task_complete(&self, _stage: AnalysisStage, _label: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: AnalysisStage) {}
}
