//! Demo-mode optimization with deterministic URL and size derivation.
//!
//! No network calls: variant URLs are derived from the source URL and the
//! variant size from a fixed per-modality reduction factor.

use async_trait::async_trait;

use mediaforge_core::asset::{GeneratedAsset, Modality};
use mediaforge_core::platform::Platform;

use crate::backend::{OptimizeBackend, OptimizedVariant};
use crate::error::OptimizerError;

// ---------------------------------------------------------------------------
// Size model
// ---------------------------------------------------------------------------

/// Fraction of the original size kept by a demo image variant.
pub const IMAGE_SIZE_FACTOR: f64 = 0.7;

/// Fraction of the original size kept by a demo video variant.
pub const VIDEO_SIZE_FACTOR: f64 = 0.6;

/// Fraction of the original size kept by a demo 3D variant.
pub const THREE_D_SIZE_FACTOR: f64 = 0.5;

/// Demo size reduction factor for a modality.
pub fn size_factor(modality: Modality) -> f64 {
    match modality {
        Modality::Image => IMAGE_SIZE_FACTOR,
        Modality::Video => VIDEO_SIZE_FACTOR,
        Modality::ThreeD => THREE_D_SIZE_FACTOR,
    }
}

// ---------------------------------------------------------------------------
// URL derivation
// ---------------------------------------------------------------------------

/// Derive a platform variant URL by inserting `-{platform}` before the file
/// extension of the final path segment, or appending it when the segment has
/// no extension.
pub fn platform_variant_url(url: &str, platform: Platform) -> String {
    let path_start = url.rfind('/').map_or(0, |index| index + 1);
    match url[path_start..].rfind('.') {
        Some(offset) => {
            let dot = path_start + offset;
            format!("{}-{}{}", &url[..dot], platform, &url[dot..])
        }
        None => format!("{url}-{platform}"),
    }
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// Backend that derives platform variants locally.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoOptimizeBackend;

#[async_trait]
impl OptimizeBackend for DemoOptimizeBackend {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn optimize(
        &self,
        asset: &GeneratedAsset,
        platform: Platform,
    ) -> Result<OptimizedVariant, OptimizerError> {
        // Round rather than truncate: the factors are not exactly
        // representable and truncation would yield sizes like 699_999.
        let size = (asset.metadata.size_bytes as f64 * size_factor(asset.modality)).round() as u64;
        Ok(OptimizedVariant {
            url: platform_variant_url(&asset.url, platform),
            size_bytes: size,
        })
    }
}
