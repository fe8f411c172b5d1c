//! End-to-end pipeline flows against scripted components.

use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::package::ComprehensiveMediaPackage;
use mediaforge_core::platform::Platform;
use mediaforge_core::progress::PipelineStage;
use mediaforge_core::request::{
    ImageRequirements, MediaGenerationRequest, MediaRequirements, ThreeDRequirements,
    VideoRequirements,
};
use mediaforge_events::{NullProgress, ProgressSink, ProgressUpdate};
use mediaforge_optimizer::api::OptimizationApiError;
use mediaforge_optimizer::{OptimizationEngine, OptimizeBackend, OptimizedVariant, OptimizerError};
use mediaforge_pipeline::{PipelineError, PipelineManager};
use mediaforge_providers::{
    AssetPlan, DemoBackend, GenerationBackend, ImageGenerator, ProviderError, ThreeDGenerator,
    VideoGenerator,
};

// ---------------------------------------------------------------------------
// Doubles
// ---------------------------------------------------------------------------

/// Records every progress update for later assertions.
#[derive(Default)]
struct RecordingSink {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl RecordingSink {
    fn percents(&self) -> Vec<u8> {
        self.updates.lock().unwrap().iter().map(|u| u.percent).collect()
    }

    fn stages(&self) -> Vec<PipelineStage> {
        self.updates.lock().unwrap().iter().map(|u| u.stage).collect()
    }
}

impl ProgressSink for RecordingSink {
    fn report(&self, update: ProgressUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}

/// Optimize backend that fails every asset/platform pair.
struct FailingOptimizeBackend;

#[async_trait]
impl OptimizeBackend for FailingOptimizeBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn optimize(
        &self,
        _asset: &GeneratedAsset,
        _platform: Platform,
    ) -> Result<OptimizedVariant, OptimizerError> {
        Err(OptimizerError::Api(OptimizationApiError::Api {
            status: 502,
            body: "bad gateway".to_string(),
        }))
    }
}

/// Generation backend that cancels the shared token mid-stage, then
/// delegates to demo synthesis so its own stage still completes.
struct CancellingBackend {
    token: CancellationToken,
}

#[async_trait]
impl GenerationBackend for CancellingBackend {
    fn name(&self) -> &'static str {
        "cancelling"
    }

    async fn generate(&self, plan: &AssetPlan) -> Result<GeneratedAsset, ProviderError> {
        self.token.cancel();
        DemoBackend.generate(plan).await
    }
}

fn request(platforms: Vec<Platform>) -> MediaGenerationRequest {
    MediaGenerationRequest {
        app_name: "Lumen Notes".to_string(),
        category: "productivity".to_string(),
        description: "Minimal note taking with realtime sync".to_string(),
        target_platforms: platforms,
        theme: None,
        requirements: None,
    }
}

// ---------------------------------------------------------------------------
// Complete runs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_run_produces_complete_package() {
    let manager = PipelineManager::demo();
    let sink = RecordingSink::default();

    let package = manager
        .generate_complete_media_package(&request(vec![Platform::Web]), &sink)
        .await
        .unwrap();

    assert!(package.id.starts_with("media_"));
    assert_eq!(package.app_name, "Lumen Notes");
    assert_eq!(package.images.len(), 5);
    assert_eq!(package.videos.len(), 3);
    assert_eq!(package.assets_3d.len(), 3);
    assert!(package.analytics.quality_score >= 80);
    assert_eq!(package.optimized.bucket_entry_count(), 11);
    assert_eq!(package.metadata.target_platforms, vec![Platform::Web]);

    for asset in package.images.iter().chain(&package.videos).chain(&package.assets_3d) {
        assert!(asset.optimized_versions.contains_key(&Platform::Web));
    }

    let percents = sink.percents();
    assert_eq!(percents.first(), Some(&0));
    assert_eq!(percents.last(), Some(&100));
    assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));

    let stages = sink.stages();
    assert_eq!(stages.last(), Some(&PipelineStage::Complete));
    assert!(!stages.contains(&PipelineStage::Failed));
}

#[tokio::test]
async fn processing_steps_record_every_stage() {
    let package = PipelineManager::demo()
        .generate_complete_media_package(&request(vec![Platform::Web]), &NullProgress)
        .await
        .unwrap();

    assert_eq!(
        package.metadata.processing_steps,
        vec![
            "Pipeline initialization",
            "Generated 5 images",
            "Generated 3 videos",
            "Generated 3 3D assets",
            "Media optimization completed",
        ]
    );
}

#[tokio::test]
async fn analytics_sizes_match_optimizer_metrics() {
    let package = PipelineManager::demo()
        .generate_complete_media_package(&request(vec![Platform::Web, Platform::Mobile]), &NullProgress)
        .await
        .unwrap();

    let metrics = &package.optimized.metrics;
    assert_eq!(package.analytics.total_size_bytes, metrics.total_size_bytes);
    assert_eq!(package.analytics.optimized_size_bytes, metrics.optimized_size_bytes);
    assert!(package.analytics.optimized_size_bytes <= package.analytics.total_size_bytes);
    assert!(
        (package.analytics.compression_ratio - metrics.compression_ratio).abs() < f64::EPSILON
    );
}

#[tokio::test]
async fn provider_histogram_covers_every_asset() {
    let package = PipelineManager::demo()
        .generate_complete_media_package(&request(vec![Platform::Web]), &NullProgress)
        .await
        .unwrap();

    let usage = &package.analytics.provider_usage;
    assert_eq!(usage.get("demo-mode"), Some(&11));
    assert_eq!(
        usage.values().sum::<u32>(),
        package.analytics.total_asset_count
    );
}

#[tokio::test]
async fn requirement_overrides_flow_through_the_pipeline() {
    let mut req = request(vec![Platform::Web, Platform::Mobile]);
    req.requirements = Some(MediaRequirements {
        images: Some(ImageRequirements {
            count: Some(2),
            dimensions: None,
        }),
        videos: Some(VideoRequirements {
            count: Some(1),
            duration_secs: Some(10.0),
            quality: None,
        }),
        assets_3d: Some(ThreeDRequirements {
            count: Some(1),
            complexity: None,
        }),
    });

    let package = PipelineManager::demo()
        .generate_complete_media_package(&req, &NullProgress)
        .await
        .unwrap();

    assert_eq!(package.images.len(), 2);
    assert_eq!(package.videos.len(), 1);
    assert_eq!(package.assets_3d.len(), 1);
    assert_eq!(package.videos[0].metadata.size_bytes, 10_000_000);
    for asset in &package.images {
        assert_eq!(asset.optimized_versions.len(), 2);
    }
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_request_fails_before_any_stage() {
    let manager = PipelineManager::demo();
    let sink = RecordingSink::default();

    let result = manager
        .generate_complete_media_package(&request(Vec::new()), &sink)
        .await;

    assert_matches!(result, Err(PipelineError::InvalidRequest(_)));

    let stages = sink.stages();
    assert_eq!(stages.last(), Some(&PipelineStage::Failed));
    assert!(!stages.contains(&PipelineStage::GeneratingImages));
    assert_eq!(sink.percents().last(), Some(&0));
}

#[tokio::test]
async fn optimization_failure_falls_back_to_original_assets() {
    let manager = PipelineManager::new(
        ImageGenerator::demo(),
        VideoGenerator::demo(),
        ThreeDGenerator::demo(),
        OptimizationEngine::with_backend(Box::new(FailingOptimizeBackend)),
    );

    let package = manager
        .generate_complete_media_package(&request(vec![Platform::Web]), &NullProgress)
        .await
        .unwrap();

    for asset in package.images.iter().chain(&package.videos).chain(&package.assets_3d) {
        assert!(asset.optimized_versions.is_empty());
    }

    let metrics = &package.optimized.metrics;
    assert_eq!(metrics.optimized_size_bytes, metrics.total_size_bytes);
    assert_eq!(metrics.compression_ratio, 0.0);

    // Bucket URLs fall back to the original asset URLs.
    let hero = &package.optimized.images.hero[0];
    let original = package
        .images
        .iter()
        .find(|asset| asset.id == hero.asset_id)
        .unwrap();
    assert_eq!(hero.url, original.url);
}

// ---------------------------------------------------------------------------
// Determinism across runs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_runs_share_placement_but_not_ids() {
    let manager = PipelineManager::demo();
    let req = request(vec![Platform::Web]);

    let first = manager
        .generate_complete_media_package(&req, &NullProgress)
        .await
        .unwrap();
    let second = manager
        .generate_complete_media_package(&req, &NullProgress)
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.images[0].id, second.images[0].id);

    let shape = |package: &ComprehensiveMediaPackage| {
        (
            package.optimized.images.hero.len(),
            package.optimized.images.screenshots.len(),
            package.optimized.images.icons.len(),
            package.optimized.images.backgrounds.len(),
            package.optimized.images.thumbnails.len(),
            package.optimized.videos.hero.len(),
            package.optimized.videos.demo.len(),
            package.optimized.videos.tutorial.len(),
            package.optimized.assets_3d.scenes.len(),
            package.optimized.assets_3d.models.len(),
            package.optimized.assets_3d.environments.len(),
        )
    };
    assert_eq!(shape(&first), shape(&second));
    assert_eq!(shape(&first), (1, 2, 1, 1, 0, 1, 1, 1, 1, 1, 1));
    assert_eq!(first.analytics.quality_score, second.analytics.quality_score);
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pre_cancelled_token_stops_before_generation() {
    let manager = PipelineManager::demo();
    let sink = RecordingSink::default();
    let token = CancellationToken::new();
    token.cancel();

    let result = manager
        .generate_with_cancellation(&request(vec![Platform::Web]), &sink, &token)
        .await;

    assert_matches!(
        result,
        Err(PipelineError::Cancelled {
            stage: PipelineStage::GeneratingImages
        })
    );

    let stages = sink.stages();
    assert!(!stages.contains(&PipelineStage::GeneratingImages));
    assert_eq!(stages.last(), Some(&PipelineStage::Failed));
}

#[tokio::test]
async fn cancellation_between_stages_stops_next_stage() {
    let token = CancellationToken::new();
    let manager = PipelineManager::new(
        ImageGenerator::with_backend(Box::new(CancellingBackend {
            token: token.clone(),
        })),
        VideoGenerator::demo(),
        ThreeDGenerator::demo(),
        OptimizationEngine::demo(),
    );
    let sink = RecordingSink::default();

    let result = manager
        .generate_with_cancellation(&request(vec![Platform::Web]), &sink, &token)
        .await;

    assert_matches!(
        result,
        Err(PipelineError::Cancelled {
            stage: PipelineStage::GeneratingVideos
        })
    );

    let stages = sink.stages();
    assert!(stages.contains(&PipelineStage::GeneratingImages));
    assert!(!stages.contains(&PipelineStage::GeneratingVideos));
    assert_eq!(stages.last(), Some(&PipelineStage::Failed));
}
