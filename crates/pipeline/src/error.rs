//! Pipeline error types.

use mediaforge_core::error::CoreError;
use mediaforge_core::progress::PipelineStage;
use mediaforge_optimizer::OptimizerError;
use mediaforge_providers::ProviderError;

/// Errors that abort a pipeline run.
///
/// Per-asset degradations (a failed backend call, a missing platform
/// variant) are absorbed by the generators and the optimizer; only
/// request-level problems and stage-level failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The request failed validation during initialization.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] CoreError),

    /// A generation stage failed without a usable fallback.
    #[error("{} failed: {source}", .stage.label())]
    Generation {
        stage: PipelineStage,
        #[source]
        source: ProviderError,
    },

    /// The optimization stage failed fatally.
    #[error("optimization failed: {0}")]
    Optimization(#[from] OptimizerError),

    /// The run was cancelled before entering the named stage.
    #[error("pipeline cancelled before {}", .stage.label())]
    Cancelled { stage: PipelineStage },
}
