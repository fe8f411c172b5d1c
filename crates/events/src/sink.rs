//! The progress callback contract.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use mediaforge_core::progress::PipelineStage;
use mediaforge_core::types::Timestamp;

// ---------------------------------------------------------------------------
// ProgressUpdate
// ---------------------------------------------------------------------------

/// A single progress report from the pipeline.
///
/// The pipeline emits at least one update per stage transition; `percent`
/// is monotonically non-decreasing across one run, starting at 0 and
/// reaching exactly 100 on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub stage: PipelineStage,
    /// Human-readable stage label, e.g. `"Image generation"`.
    pub label: String,
    pub percent: u8,
    /// When the update was emitted (UTC).
    pub at: Timestamp,
}

impl ProgressUpdate {
    /// Build an update for a stage at a given percentage, stamped now.
    pub fn new(stage: PipelineStage, percent: u8) -> Self {
        Self {
            stage,
            label: stage.label().to_string(),
            percent,
            at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// ProgressSink
// ---------------------------------------------------------------------------

/// Receiver of pipeline progress updates.
///
/// Implementations must be cheap and non-blocking; the pipeline calls
/// [`report`](ProgressSink::report) synchronously between awaits.
pub trait ProgressSink: Send + Sync {
    fn report(&self, update: ProgressUpdate);
}

/// Any sendable closure is a sink.
impl<F> ProgressSink for F
where
    F: Fn(ProgressUpdate) + Send + Sync,
{
    fn report(&self, update: ProgressUpdate) {
        self(update)
    }
}

/// Sink that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _update: ProgressUpdate) {}
}
