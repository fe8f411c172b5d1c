//! Optimized and comprehensive package shapes, plus package id synthesis.

use rand::Rng;

use crate::analytics::PackageAnalytics;
use crate::asset::GeneratedAsset;
use crate::platform::Platform;
use crate::theme::Theme;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the random suffix in a package id.
pub const PACKAGE_ID_SUFFIX_LENGTH: usize = 9;

// ---------------------------------------------------------------------------
// Bucket types
// ---------------------------------------------------------------------------

/// Reference from a category bucket back to an asset and its delivery URL.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OptimizedAssetRef {
    pub asset_id: String,
    pub url: String,
}

/// Categorized optimized images.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageBuckets {
    pub hero: Vec<OptimizedAssetRef>,
    pub screenshots: Vec<OptimizedAssetRef>,
    pub icons: Vec<OptimizedAssetRef>,
    pub backgrounds: Vec<OptimizedAssetRef>,
    pub thumbnails: Vec<OptimizedAssetRef>,
}

/// Categorized optimized videos.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoBuckets {
    pub hero: Vec<OptimizedAssetRef>,
    pub demo: Vec<OptimizedAssetRef>,
    pub tutorial: Vec<OptimizedAssetRef>,
    pub loading: Vec<OptimizedAssetRef>,
    pub transitions: Vec<OptimizedAssetRef>,
}

/// Categorized optimized 3D assets.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThreeDBuckets {
    pub scenes: Vec<OptimizedAssetRef>,
    pub models: Vec<OptimizedAssetRef>,
    pub environments: Vec<OptimizedAssetRef>,
    pub animations: Vec<OptimizedAssetRef>,
}

impl ImageBuckets {
    /// Total entries across all buckets.
    pub fn len(&self) -> usize {
        self.hero.len()
            + self.screenshots.len()
            + self.icons.len()
            + self.backgrounds.len()
            + self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VideoBuckets {
    /// Total entries across all buckets.
    pub fn len(&self) -> usize {
        self.hero.len()
            + self.demo.len()
            + self.tutorial.len()
            + self.loading.len()
            + self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ThreeDBuckets {
    /// Total entries across all buckets.
    pub fn len(&self) -> usize {
        self.scenes.len() + self.models.len() + self.environments.len() + self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// Size, time, and quality figures for one optimization run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimizationMetrics {
    pub total_size_bytes: u64,
    pub optimized_size_bytes: u64,
    pub compression_ratio: f64,
    pub processing_time_ms: u64,
    pub quality_score: u8,
}

/// Categorized view over the optimized assets plus run metrics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimizedMediaPackage {
    pub images: ImageBuckets,
    pub videos: VideoBuckets,
    pub assets_3d: ThreeDBuckets,
    pub metrics: OptimizationMetrics,
}

impl OptimizedMediaPackage {
    /// Total bucket entries across all modalities.
    pub fn bucket_entry_count(&self) -> usize {
        self.images.len() + self.videos.len() + self.assets_3d.len()
    }
}

/// Audit metadata recorded alongside the final package.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PackageMetadata {
    /// Master prompt the whole run was derived from.
    pub prompt: String,
    pub category: String,
    pub target_platforms: Vec<Platform>,
    pub theme: Theme,
    /// Ordered step labels for audit/debugging.
    pub processing_steps: Vec<String>,
}

/// The immutable top-level result of one pipeline run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComprehensiveMediaPackage {
    pub id: String,
    pub app_name: String,
    pub generated_at: Timestamp,
    pub images: Vec<GeneratedAsset>,
    pub videos: Vec<GeneratedAsset>,
    pub assets_3d: Vec<GeneratedAsset>,
    pub optimized: OptimizedMediaPackage,
    pub analytics: PackageAnalytics,
    pub metadata: PackageMetadata,
}

impl ComprehensiveMediaPackage {
    /// Total raw assets across the three modality lists.
    pub fn total_asset_count(&self) -> usize {
        self.images.len() + self.videos.len() + self.assets_3d.len()
    }
}

// ---------------------------------------------------------------------------
// Package id
// ---------------------------------------------------------------------------

/// Generate a package id, unique per invocation: a millisecond timestamp
/// plus a random lowercase alphanumeric suffix.
pub fn package_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(PACKAGE_ID_SUFFIX_LENGTH)
        .map(char::from)
        .collect();
    format!(
        "media_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}
