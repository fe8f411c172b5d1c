//! Error types for the generator clients.

use mediaforge_core::error::CoreError;

use crate::api::GenerationApiError;

/// Errors inside the generator layer.
///
/// Only [`ProviderError::Validation`] ever crosses a client boundary; live
/// transport and provider failures are absorbed per asset by the demo
/// fallback before a client returns.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The generation context failed its contract checks.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// A live generation call failed.
    #[error(transparent)]
    Api(#[from] GenerationApiError),
}
