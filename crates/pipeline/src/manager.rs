//! The pipeline manager: one request in, one comprehensive package out.

use std::time::Instant;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use mediaforge_core::analytics::{provider_usage, PackageAnalytics};
use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::package::{package_id, ComprehensiveMediaPackage, PackageMetadata};
use mediaforge_core::progress::PipelineStage;
use mediaforge_core::quality::package_quality_score;
use mediaforge_core::request::{MediaGenerationRequest, MediaRequirements};
use mediaforge_events::{ProgressSink, ProgressTracker};
use mediaforge_optimizer::engine::OptimizationOutcome;
use mediaforge_optimizer::OptimizationEngine;
use mediaforge_providers::plan::GenerationContext;
use mediaforge_providers::{ImageGenerator, ThreeDGenerator, VideoGenerator};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Orchestrates the full media pipeline.
///
/// Components are injected at construction, so tests can swap any generator
/// or the optimizer for a scripted double without touching the flow itself.
pub struct PipelineManager {
    images: ImageGenerator,
    videos: VideoGenerator,
    assets_3d: ThreeDGenerator,
    optimizer: OptimizationEngine,
}

impl PipelineManager {
    /// Manager with explicit component clients.
    pub fn new(
        images: ImageGenerator,
        videos: VideoGenerator,
        assets_3d: ThreeDGenerator,
        optimizer: OptimizationEngine,
    ) -> Self {
        Self {
            images,
            videos,
            assets_3d,
            optimizer,
        }
    }

    /// Fully offline manager: demo generators and demo optimization.
    pub fn demo() -> Self {
        Self::new(
            ImageGenerator::demo(),
            VideoGenerator::demo(),
            ThreeDGenerator::demo(),
            OptimizationEngine::demo(),
        )
    }

    /// Manager whose components go live only where configuration allows.
    pub fn from_config(config: PipelineConfig) -> Self {
        Self::new(
            ImageGenerator::from_config(config.generator.clone()),
            VideoGenerator::from_config(config.generator.clone()),
            ThreeDGenerator::from_config(config.generator),
            OptimizationEngine::from_config(config.optimizer),
        )
    }

    /// Run the full pipeline for one request.
    ///
    /// Progress is reported to `progress` after every stage transition; the
    /// final update on success is `Complete` at exactly 100.
    pub async fn generate_complete_media_package(
        &self,
        request: &MediaGenerationRequest,
        progress: &dyn ProgressSink,
    ) -> Result<ComprehensiveMediaPackage, PipelineError> {
        self.generate_with_cancellation(request, progress, &CancellationToken::new())
            .await
    }

    /// Run the full pipeline, stopping cooperatively at the next stage
    /// boundary once `cancel` is cancelled.
    pub async fn generate_with_cancellation(
        &self,
        request: &MediaGenerationRequest,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<ComprehensiveMediaPackage, PipelineError> {
        let mut tracker = ProgressTracker::new(progress);

        match self.run(request, &mut tracker, cancel).await {
            Ok(package) => Ok(package),
            Err(error) => {
                tracker.failed();
                tracing::error!(%error, "Pipeline run failed");
                Err(error)
            }
        }
    }

    // ---- stages ----

    async fn run(
        &self,
        request: &MediaGenerationRequest,
        tracker: &mut ProgressTracker<'_>,
        cancel: &CancellationToken,
    ) -> Result<ComprehensiveMediaPackage, PipelineError> {
        let started = Instant::now();

        tracker.stage_entered(PipelineStage::Initializing);
        request.validate()?;
        let ctx = GenerationContext::from_request(request);
        let requirements = request.requirements.clone().unwrap_or_default();
        let mut steps = vec!["Pipeline initialization".to_string()];
        tracing::info!(
            app_name = %ctx.app_name,
            platforms = ?ctx.platforms,
            "Starting media pipeline run"
        );
        tracker.stage_completed(PipelineStage::Initializing);

        let images = self
            .generate_images(&ctx, &requirements, tracker, cancel)
            .await?;
        steps.push(format!("Generated {} images", images.len()));

        let videos = self
            .generate_videos(&ctx, &requirements, tracker, cancel)
            .await?;
        steps.push(format!("Generated {} videos", videos.len()));

        let assets_3d = self
            .generate_3d(&ctx, &requirements, tracker, cancel)
            .await?;
        steps.push(format!("Generated {} 3D assets", assets_3d.len()));

        ensure_active(cancel, PipelineStage::Optimizing)?;
        tracker.stage_entered(PipelineStage::Optimizing);
        let outcome = self
            .optimizer
            .optimize(images, videos, assets_3d, &ctx.platforms)
            .await?;
        steps.push("Media optimization completed".to_string());
        tracker.stage_completed(PipelineStage::Optimizing);

        ensure_active(cancel, PipelineStage::Finalizing)?;
        tracker.stage_entered(PipelineStage::Finalizing);
        let package = assemble_package(request, &ctx, outcome, steps, started);
        tracker.report_fraction(PipelineStage::Finalizing, 0.5);

        tracing::info!(
            package_id = %package.id,
            assets = package.total_asset_count(),
            quality = package.analytics.quality_score,
            elapsed_ms = package.analytics.total_generation_time_ms,
            "Pipeline run complete"
        );
        tracker.stage_completed(PipelineStage::Complete);

        Ok(package)
    }

    async fn generate_images(
        &self,
        ctx: &GenerationContext,
        requirements: &MediaRequirements,
        tracker: &mut ProgressTracker<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratedAsset>, PipelineError> {
        ensure_active(cancel, PipelineStage::GeneratingImages)?;
        tracker.stage_entered(PipelineStage::GeneratingImages);
        let assets = self
            .images
            .generate(ctx, requirements.images.as_ref())
            .await
            .map_err(|source| PipelineError::Generation {
                stage: PipelineStage::GeneratingImages,
                source,
            })?;
        tracker.stage_completed(PipelineStage::GeneratingImages);
        Ok(assets)
    }

    async fn generate_videos(
        &self,
        ctx: &GenerationContext,
        requirements: &MediaRequirements,
        tracker: &mut ProgressTracker<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratedAsset>, PipelineError> {
        ensure_active(cancel, PipelineStage::GeneratingVideos)?;
        tracker.stage_entered(PipelineStage::GeneratingVideos);
        let assets = self
            .videos
            .generate(ctx, requirements.videos.as_ref())
            .await
            .map_err(|source| PipelineError::Generation {
                stage: PipelineStage::GeneratingVideos,
                source,
            })?;
        tracker.stage_completed(PipelineStage::GeneratingVideos);
        Ok(assets)
    }

    async fn generate_3d(
        &self,
        ctx: &GenerationContext,
        requirements: &MediaRequirements,
        tracker: &mut ProgressTracker<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratedAsset>, PipelineError> {
        ensure_active(cancel, PipelineStage::Generating3d)?;
        tracker.stage_entered(PipelineStage::Generating3d);
        let assets = self
            .assets_3d
            .generate(ctx, requirements.assets_3d.as_ref())
            .await
            .map_err(|source| PipelineError::Generation {
                stage: PipelineStage::Generating3d,
                source,
            })?;
        tracker.stage_completed(PipelineStage::Generating3d);
        Ok(assets)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Cancellation is cooperative: checked at stage boundaries, so a cancelled
/// run stops before entering `stage`.
fn ensure_active(cancel: &CancellationToken, stage: PipelineStage) -> Result<(), PipelineError> {
    if cancel.is_cancelled() {
        return Err(PipelineError::Cancelled { stage });
    }
    Ok(())
}

/// Assemble the final package from the optimization outcome.
fn assemble_package(
    request: &MediaGenerationRequest,
    ctx: &GenerationContext,
    outcome: OptimizationOutcome,
    processing_steps: Vec<String>,
    started: Instant,
) -> ComprehensiveMediaPackage {
    let OptimizationOutcome {
        images,
        videos,
        assets_3d,
        package: optimized,
    } = outcome;

    let total_generation_time_ms = started.elapsed().as_millis() as u64;
    let present_modalities = [
        !images.is_empty(),
        !videos.is_empty(),
        !assets_3d.is_empty(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count() as u8;

    let quality_score = package_quality_score(
        optimized.metrics.quality_score,
        present_modalities,
        optimized.metrics.compression_ratio,
        total_generation_time_ms,
    );

    let analytics = PackageAnalytics {
        total_generation_time_ms,
        total_asset_count: (images.len() + videos.len() + assets_3d.len()) as u32,
        total_size_bytes: optimized.metrics.total_size_bytes,
        optimized_size_bytes: optimized.metrics.optimized_size_bytes,
        compression_ratio: optimized.metrics.compression_ratio,
        quality_score,
        provider_usage: provider_usage(images.iter().chain(&videos).chain(&assets_3d)),
    };

    ComprehensiveMediaPackage {
        id: package_id(),
        app_name: ctx.app_name.clone(),
        generated_at: Utc::now(),
        images,
        videos,
        assets_3d,
        optimized,
        analytics,
        metadata: PackageMetadata {
            prompt: request.master_prompt(),
            category: ctx.category.clone(),
            target_platforms: ctx.platforms.clone(),
            theme: ctx.theme.clone(),
            processing_steps,
        },
    }
}
