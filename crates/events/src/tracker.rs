//! Per-invocation progress bookkeeping.

use mediaforge_core::progress::PipelineStage;

use crate::sink::{ProgressSink, ProgressUpdate};

/// Tracks the reported percentage for one pipeline run and forwards updates
/// to a [`ProgressSink`].
///
/// The tracker enforces the monotonicity contract: a computed percentage
/// below the last reported one is clamped up to it, so callers can report
/// stage fractions without worrying about rounding regressions.
pub struct ProgressTracker<'a> {
    sink: &'a dyn ProgressSink,
    last_percent: u8,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self {
            sink,
            last_percent: 0,
        }
    }

    /// Report entry into a stage (fraction 0.0 of its window).
    pub fn stage_entered(&mut self, stage: PipelineStage) {
        self.report_fraction(stage, 0.0);
    }

    /// Report completion of a stage (fraction 1.0 of its window).
    pub fn stage_completed(&mut self, stage: PipelineStage) {
        self.report_fraction(stage, 1.0);
    }

    /// Report partial progress through a stage's window.
    ///
    /// `Failed` has no window and is ignored here; use
    /// [`failed`](Self::failed) instead.
    pub fn report_fraction(&mut self, stage: PipelineStage, fraction: f64) {
        if let Some(window) = stage.window() {
            let percent = window.percent_at(fraction).max(self.last_percent);
            self.emit(stage, percent);
        }
    }

    /// Report pipeline failure. The percentage freezes at the last
    /// reported value.
    pub fn failed(&mut self) {
        self.emit(PipelineStage::Failed, self.last_percent);
    }

    /// The most recently reported percentage.
    pub fn last_percent(&self) -> u8 {
        self.last_percent
    }

    fn emit(&mut self, stage: PipelineStage, percent: u8) {
        self.last_percent = percent;
        self.sink.report(ProgressUpdate::new(stage, percent));
    }
}
