//! Backend seam between a generator client and its asset source.

use async_trait::async_trait;

use mediaforge_core::asset::GeneratedAsset;

use crate::error::ProviderError;
use crate::plan::AssetPlan;

/// One source of generated assets.
///
/// Implemented by the live HTTP backend and by demo synthesis; a client
/// selects its backend once at construction. The per-asset fallback policy
/// lives in the clients, not here.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short backend identifier used in logs.
    fn name(&self) -> &'static str;

    /// Produce the asset described by `plan`. The returned asset carries its
    /// provider name in `metadata.provider`.
    async fn generate(&self, plan: &AssetPlan) -> Result<GeneratedAsset, ProviderError>;
}
