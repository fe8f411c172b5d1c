//! Error types for the optimization crate.

use crate::api::OptimizationApiError;

/// Errors returned by the optimization engine.
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    /// The optimization inputs failed validation.
    #[error("invalid optimization input: {0}")]
    InvalidInput(String),

    /// A live optimization service call failed.
    #[error(transparent)]
    Api(#[from] OptimizationApiError),
}
