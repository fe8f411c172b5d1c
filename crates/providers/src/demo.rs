//! Deterministic demo asset synthesis.
//!
//! Serves two roles: the standalone backend when no live credential is
//! configured, and the per-asset fallback when a live call fails. URLs and
//! sizes depend only on the plan, so synthesis is reproducible; asset ids
//! are still unique per call.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use mediaforge_core::asset::{AssetMetadata, GeneratedAsset, Modality};
use mediaforge_core::request::Complexity;

use crate::backend::GenerationBackend;
use crate::error::ProviderError;
use crate::plan::AssetPlan;

/// Provider name recorded on every synthesized asset.
pub const DEMO_PROVIDER: &str = "demo-mode";

/// Base URL of the placeholder asset host.
pub const DEMO_BASE_URL: &str = "https://demo-assets.mediaforge.dev";

/// Size used when a plan carries no sizing hint at all.
const DEFAULT_DEMO_SIZE_BYTES: u64 = 1_048_576;

/// Bytes per second of demo video footage.
const VIDEO_BYTES_PER_SECOND: f64 = 1_000_000.0;

/// Synthesize the demo asset for a plan.
pub fn demo_asset(plan: &AssetPlan) -> GeneratedAsset {
    GeneratedAsset {
        id: uuid::Uuid::new_v4().to_string(),
        modality: plan.modality,
        url: demo_url(plan),
        thumbnail_url: demo_thumbnail_url(plan),
        metadata: AssetMetadata {
            width: plan.dimensions.map(|d| d.width),
            height: plan.dimensions.map(|d| d.height),
            duration_secs: plan.duration_secs,
            size_bytes: demo_size_bytes(plan),
            format: plan.format.to_string(),
            quality: plan.quality,
            prompt: plan.prompt.clone(),
            generated_at: Utc::now(),
            provider: DEMO_PROVIDER.to_string(),
        },
        optimized_versions: HashMap::new(),
    }
}

fn demo_url(plan: &AssetPlan) -> String {
    format!("{DEMO_BASE_URL}/{}/{}.{}", plan.modality, plan.kind, plan.format)
}

/// Videos get a placeholder poster frame; other modalities have none.
fn demo_thumbnail_url(plan: &AssetPlan) -> Option<String> {
    (plan.modality == Modality::Video)
        .then(|| format!("{DEMO_BASE_URL}/{}/{}-thumb.jpg", plan.modality, plan.kind))
}

/// Plausible deterministic byte size for a demo asset.
///
/// Images scale with pixel count, videos with duration (1 MB per second),
/// 3D assets with mesh complexity.
fn demo_size_bytes(plan: &AssetPlan) -> u64 {
    match plan.modality {
        Modality::Image => plan
            .dimensions
            .map(|d| u64::from(d.width) * u64::from(d.height) / 4)
            .unwrap_or(DEFAULT_DEMO_SIZE_BYTES),
        Modality::Video => plan
            .duration_secs
            .map(|secs| (secs * VIDEO_BYTES_PER_SECOND) as u64)
            .unwrap_or(DEFAULT_DEMO_SIZE_BYTES),
        Modality::ThreeD => match plan.complexity.unwrap_or_default() {
            Complexity::Low => 100_000,
            Complexity::Medium => 500_000,
            Complexity::High => 2_000_000,
        },
    }
}

/// Backend that always synthesizes demo assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoBackend;

#[async_trait]
impl GenerationBackend for DemoBackend {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn generate(&self, plan: &AssetPlan) -> Result<GeneratedAsset, ProviderError> {
        Ok(demo_asset(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaforge_core::request::{Dimensions, QualityTier};
    use mediaforge_core::theme::ThemeStyle;

    fn image_plan() -> AssetPlan {
        AssetPlan {
            modality: Modality::Image,
            kind: "hero",
            prompt: "Professional hero image".to_string(),
            dimensions: Some(Dimensions::new(1920, 1080)),
            duration_secs: None,
            complexity: None,
            quality: QualityTier::Premium,
            style: ThemeStyle::Glassmorphic,
            format: "webp",
        }
    }

    fn video_plan(duration_secs: f64) -> AssetPlan {
        AssetPlan {
            modality: Modality::Video,
            kind: "demo",
            prompt: "Feature demo video".to_string(),
            dimensions: None,
            duration_secs: Some(duration_secs),
            complexity: None,
            quality: QualityTier::Standard,
            style: ThemeStyle::Glassmorphic,
            format: "mp4",
        }
    }

    fn three_d_plan(complexity: Complexity) -> AssetPlan {
        AssetPlan {
            modality: Modality::ThreeD,
            kind: "scene",
            prompt: "Interactive 3D scene".to_string(),
            dimensions: None,
            duration_secs: None,
            complexity: Some(complexity),
            quality: QualityTier::Premium,
            style: ThemeStyle::Glassmorphic,
            format: "gltf",
        }
    }

    // -- determinism --

    #[test]
    fn same_plan_yields_same_url_and_size() {
        let plan = image_plan();
        let first = demo_asset(&plan);
        let second = demo_asset(&plan);

        assert_eq!(first.url, second.url);
        assert_eq!(first.metadata.size_bytes, second.metadata.size_bytes);
        assert_ne!(first.id, second.id);
    }

    // -- urls --

    #[test]
    fn url_is_seeded_by_modality_and_kind() {
        let asset = demo_asset(&image_plan());
        assert_eq!(asset.url, format!("{DEMO_BASE_URL}/image/hero.webp"));
    }

    #[test]
    fn only_videos_get_a_thumbnail() {
        assert!(demo_asset(&image_plan()).thumbnail_url.is_none());

        let video = demo_asset(&video_plan(30.0));
        assert_eq!(
            video.thumbnail_url.as_deref(),
            Some("https://demo-assets.mediaforge.dev/video/demo-thumb.jpg")
        );
    }

    // -- sizes --

    #[test]
    fn image_size_scales_with_pixel_count() {
        let asset = demo_asset(&image_plan());
        assert_eq!(asset.metadata.size_bytes, 1920 * 1080 / 4);
    }

    #[test]
    fn video_size_is_one_megabyte_per_second() {
        let asset = demo_asset(&video_plan(60.0));
        assert_eq!(asset.metadata.size_bytes, 60_000_000);
    }

    #[test]
    fn three_d_size_scales_with_complexity() {
        assert_eq!(
            demo_asset(&three_d_plan(Complexity::Low)).metadata.size_bytes,
            100_000
        );
        assert_eq!(
            demo_asset(&three_d_plan(Complexity::Medium)).metadata.size_bytes,
            500_000
        );
        assert_eq!(
            demo_asset(&three_d_plan(Complexity::High)).metadata.size_bytes,
            2_000_000
        );
    }

    // -- provenance --

    #[test]
    fn demo_assets_credit_the_demo_provider() {
        let asset = demo_asset(&video_plan(10.0));
        assert_eq!(asset.metadata.provider, DEMO_PROVIDER);
        assert_eq!(asset.metadata.prompt, "Feature demo video");
    }
}
