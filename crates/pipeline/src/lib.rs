//! End-to-end media pipeline orchestration.
//!
//! The [`PipelineManager`] drives one request through validation, the three
//! generation stages, optimization, and package assembly, reporting progress
//! after every transition and honoring cooperative cancellation between
//! stages.

pub mod config;
pub mod error;
pub mod manager;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use manager::PipelineManager;
