//! Optimization engine: per-platform variants, byte accounting, and
//! categorized package assembly.

use std::collections::HashMap;
use std::time::Instant;

use mediaforge_core::analytics::compression_ratio;
use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::categorize::{ImageCategory, ThreeDCategory, VideoCategory};
use mediaforge_core::package::{
    ImageBuckets, OptimizationMetrics, OptimizedAssetRef, OptimizedMediaPackage, ThreeDBuckets,
    VideoBuckets,
};
use mediaforge_core::platform::Platform;
use mediaforge_core::quality::{optimization_quality_score, ModalityCoverage};

use crate::backend::OptimizeBackend;
use crate::config::OptimizerConfig;
use crate::demo::DemoOptimizeBackend;
use crate::error::OptimizerError;
use crate::live::LiveOptimizeBackend;

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Result of one optimization run: the annotated asset lists plus the
/// categorized package with metrics.
#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub images: Vec<GeneratedAsset>,
    pub videos: Vec<GeneratedAsset>,
    pub assets_3d: Vec<GeneratedAsset>,
    pub package: OptimizedMediaPackage,
}

/// Annotated assets and byte accounting for one modality batch.
struct BatchOutcome {
    assets: Vec<GeneratedAsset>,
    original_bytes: u64,
    final_bytes: u64,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Produces per-platform variants of generated assets and assembles the
/// categorized optimized package.
pub struct OptimizationEngine {
    backend: Box<dyn OptimizeBackend>,
}

impl OptimizationEngine {
    /// Engine backed by the hosted optimization service.
    pub fn live(config: OptimizerConfig) -> Self {
        Self::with_backend(Box::new(LiveOptimizeBackend::new(config)))
    }

    /// Engine backed by local demo derivation.
    pub fn demo() -> Self {
        Self::with_backend(Box::new(DemoOptimizeBackend))
    }

    /// Pick the backend from configuration: demo unless a real key is set.
    pub fn from_config(config: OptimizerConfig) -> Self {
        if config.is_demo() {
            Self::demo()
        } else {
            Self::live(config)
        }
    }

    /// Engine with an explicit backend.
    pub fn with_backend(backend: Box<dyn OptimizeBackend>) -> Self {
        Self { backend }
    }

    /// Optimize every asset for every target platform and assemble the
    /// categorized package.
    ///
    /// Per asset/platform failures degrade that pair to the original asset;
    /// only an empty platform list is fatal. An asset's accounted size is its
    /// smallest successful variant, clamped to never exceed the original, so
    /// the optimized total can never be larger than the raw total.
    pub async fn optimize(
        &self,
        images: Vec<GeneratedAsset>,
        videos: Vec<GeneratedAsset>,
        assets_3d: Vec<GeneratedAsset>,
        platforms: &[Platform],
    ) -> Result<OptimizationOutcome, OptimizerError> {
        if platforms.is_empty() {
            return Err(OptimizerError::InvalidInput(
                "at least one target platform is required".to_string(),
            ));
        }

        let started = Instant::now();

        let images = self.optimize_batch(images, platforms).await;
        let videos = self.optimize_batch(videos, platforms).await;
        let assets_3d = self.optimize_batch(assets_3d, platforms).await;

        let total_size_bytes =
            images.original_bytes + videos.original_bytes + assets_3d.original_bytes;
        let optimized_size_bytes = images.final_bytes + videos.final_bytes + assets_3d.final_bytes;

        let quality_score = optimization_quality_score(
            coverage_of(&images.assets),
            coverage_of(&videos.assets),
            coverage_of(&assets_3d.assets),
        );

        let metrics = OptimizationMetrics {
            total_size_bytes,
            optimized_size_bytes,
            compression_ratio: compression_ratio(total_size_bytes, optimized_size_bytes),
            processing_time_ms: started.elapsed().as_millis() as u64,
            quality_score,
        };

        tracing::info!(
            backend = self.backend.name(),
            total_size_bytes,
            optimized_size_bytes,
            compression_ratio = metrics.compression_ratio,
            quality_score = metrics.quality_score,
            "Optimization run complete"
        );

        let package = OptimizedMediaPackage {
            images: image_buckets(&images.assets, platforms),
            videos: video_buckets(&videos.assets, platforms),
            assets_3d: three_d_buckets(&assets_3d.assets, platforms),
            metrics,
        };

        Ok(OptimizationOutcome {
            images: images.assets,
            videos: videos.assets,
            assets_3d: assets_3d.assets,
            package,
        })
    }

    // ---- private helpers ----

    /// Optimize one modality batch, threading the byte totals back to the
    /// caller instead of accumulating them in shared state.
    async fn optimize_batch(
        &self,
        assets: Vec<GeneratedAsset>,
        platforms: &[Platform],
    ) -> BatchOutcome {
        let mut annotated = Vec::with_capacity(assets.len());
        let mut original_bytes = 0u64;
        let mut final_bytes = 0u64;

        for asset in assets {
            let (asset, final_size) = self.optimize_asset(asset, platforms).await;
            original_bytes += asset.metadata.size_bytes;
            final_bytes += final_size;
            annotated.push(asset);
        }

        BatchOutcome {
            assets: annotated,
            original_bytes,
            final_bytes,
        }
    }

    /// Produce every platform variant for one asset. Returns the annotated
    /// asset and its accounted size: the smallest successful variant, never
    /// larger than the original.
    async fn optimize_asset(
        &self,
        asset: GeneratedAsset,
        platforms: &[Platform],
    ) -> (GeneratedAsset, u64) {
        let mut versions = HashMap::new();
        let mut smallest: Option<u64> = None;

        for &platform in platforms {
            match self.backend.optimize(&asset, platform).await {
                Ok(variant) => {
                    smallest =
                        Some(smallest.map_or(variant.size_bytes, |s| s.min(variant.size_bytes)));
                    versions.insert(platform, variant.url);
                }
                Err(error) => {
                    tracing::warn!(
                        backend = self.backend.name(),
                        asset_id = %asset.id,
                        platform = %platform,
                        %error,
                        "Optimization failed for platform, keeping original"
                    );
                }
            }
        }

        let original = asset.metadata.size_bytes;
        let final_size = smallest.map_or(original, |s| s.min(original));
        (asset.with_optimized_versions(versions), final_size)
    }
}

// ---------------------------------------------------------------------------
// Bucket assembly
// ---------------------------------------------------------------------------

/// Delivery URL for a bucket entry: the variant of the first platform in
/// the request's order that has one, else the original URL.
fn bucket_url(asset: &GeneratedAsset, platforms: &[Platform]) -> String {
    platforms
        .iter()
        .find_map(|platform| asset.optimized_versions.get(platform))
        .cloned()
        .unwrap_or_else(|| asset.url.clone())
}

fn bucket_entry(asset: &GeneratedAsset, platforms: &[Platform]) -> OptimizedAssetRef {
    OptimizedAssetRef {
        asset_id: asset.id.clone(),
        url: bucket_url(asset, platforms),
    }
}

fn image_buckets(assets: &[GeneratedAsset], platforms: &[Platform]) -> ImageBuckets {
    let mut buckets = ImageBuckets::default();
    for asset in assets {
        let entry = bucket_entry(asset, platforms);
        match ImageCategory::from_prompt(&asset.metadata.prompt) {
            ImageCategory::Hero => buckets.hero.push(entry),
            ImageCategory::Screenshots => buckets.screenshots.push(entry),
            ImageCategory::Icons => buckets.icons.push(entry),
            ImageCategory::Backgrounds => buckets.backgrounds.push(entry),
            ImageCategory::Thumbnails => buckets.thumbnails.push(entry),
        }
    }
    buckets
}

fn video_buckets(assets: &[GeneratedAsset], platforms: &[Platform]) -> VideoBuckets {
    let mut buckets = VideoBuckets::default();
    for asset in assets {
        let entry = bucket_entry(asset, platforms);
        match VideoCategory::from_prompt(&asset.metadata.prompt) {
            VideoCategory::Hero => buckets.hero.push(entry),
            VideoCategory::Demo => buckets.demo.push(entry),
            VideoCategory::Tutorial => buckets.tutorial.push(entry),
            VideoCategory::Loading => buckets.loading.push(entry),
            VideoCategory::Transitions => buckets.transitions.push(entry),
        }
    }
    buckets
}

fn three_d_buckets(assets: &[GeneratedAsset], platforms: &[Platform]) -> ThreeDBuckets {
    let mut buckets = ThreeDBuckets::default();
    for asset in assets {
        let entry = bucket_entry(asset, platforms);
        match ThreeDCategory::from_prompt(&asset.metadata.prompt) {
            ThreeDCategory::Scenes => buckets.scenes.push(entry),
            ThreeDCategory::Models => buckets.models.push(entry),
            ThreeDCategory::Environments => buckets.environments.push(entry),
            ThreeDCategory::Animations => buckets.animations.push(entry),
        }
    }
    buckets
}

/// Coverage for a batch: how many assets carry at least one variant.
fn coverage_of(assets: &[GeneratedAsset]) -> ModalityCoverage {
    let optimized = assets
        .iter()
        .filter(|asset| !asset.optimized_versions.is_empty())
        .count();
    ModalityCoverage::new(assets.len(), optimized)
}
