//! Progress reporting infrastructure for the media pipeline.
//!
//! Building blocks:
//!
//! - [`ProgressUpdate`]: the canonical progress event envelope.
//! - [`ProgressSink`]: the callback contract the pipeline reports through;
//!   any `Fn(ProgressUpdate)` closure qualifies.
//! - [`ProgressBus`]: in-process fan-out hub backed by
//!   `tokio::sync::broadcast`, for multiple observers of one run.
//! - [`ProgressTracker`]: per-invocation percentage bookkeeping that keeps
//!   the reported sequence monotonically non-decreasing.

pub mod bus;
pub mod sink;
pub mod tracker;

pub use bus::ProgressBus;
pub use sink::{NullProgress, ProgressSink, ProgressUpdate};
pub use tracker::ProgressTracker;
