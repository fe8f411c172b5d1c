//! Backend abstraction for producing per-platform asset variants.

use async_trait::async_trait;

use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::platform::Platform;

use crate::error::OptimizerError;

/// One optimized variant of an asset for a single platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedVariant {
    /// URL of the platform-specific variant.
    pub url: String,
    /// Size of the variant in bytes.
    pub size_bytes: u64,
}

/// Strategy for producing platform variants of a generated asset.
///
/// The engine calls this once per asset/platform pair. A failure affects only
/// that pair; the engine falls back to the original asset.
#[async_trait]
pub trait OptimizeBackend: Send + Sync {
    /// Backend name used in log output.
    fn name(&self) -> &'static str;

    /// Produce the platform variant of `asset`.
    async fn optimize(
        &self,
        asset: &GeneratedAsset,
        platform: Platform,
    ) -> Result<OptimizedVariant, OptimizerError>;
}
