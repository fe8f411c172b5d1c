//! Video generator client.

use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::request::VideoRequirements;

use crate::backend::GenerationBackend;
use crate::config::GeneratorConfig;
use crate::demo::{demo_asset, DemoBackend};
use crate::error::ProviderError;
use crate::live::LiveBackend;
use crate::plan::{video_plans, GenerationContext};

/// Generator client for videos.
///
/// Same contract as the image client: the batch always completes, with
/// failing backend calls replaced by demo assets per plan.
pub struct VideoGenerator {
    backend: Box<dyn GenerationBackend>,
}

impl VideoGenerator {
    /// Client backed by the live generation service.
    pub fn live(config: GeneratorConfig) -> Self {
        Self::with_backend(Box::new(LiveBackend::new(config)))
    }

    /// Client that only synthesizes demo assets.
    pub fn demo() -> Self {
        Self::with_backend(Box::new(DemoBackend))
    }

    /// Select the live backend when a usable credential is configured, the
    /// demo backend otherwise.
    pub fn from_config(config: GeneratorConfig) -> Self {
        if config.is_demo() {
            Self::demo()
        } else {
            Self::live(config)
        }
    }

    /// Inject a custom backend.
    pub fn with_backend(backend: Box<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Generate the planned videos for a request context.
    pub async fn generate(
        &self,
        ctx: &GenerationContext,
        requirements: Option<&VideoRequirements>,
    ) -> Result<Vec<GeneratedAsset>, ProviderError> {
        ctx.ensure_valid()?;

        let plans = video_plans(ctx, requirements);
        let mut assets = Vec::with_capacity(plans.len());
        for plan in &plans {
            let asset = match self.backend.generate(plan).await {
                Ok(asset) => asset,
                Err(error) => {
                    tracing::warn!(
                        backend = self.backend.name(),
                        kind = plan.kind,
                        %error,
                        "Video generation failed, falling back to demo asset"
                    );
                    demo_asset(plan)
                }
            };
            assets.push(asset);
        }

        tracing::debug!(count = assets.len(), "Generated video batch");
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaforge_core::asset::Modality;
    use mediaforge_core::platform::Platform;
    use mediaforge_core::theme::Theme;

    fn sample_context() -> GenerationContext {
        GenerationContext {
            app_name: "Wavelength".to_string(),
            category: "music".to_string(),
            description: "Collaborative playlist builder".to_string(),
            platforms: vec![Platform::Web],
            theme: Theme::default(),
        }
    }

    #[tokio::test]
    async fn demo_client_returns_hero_demo_and_tutorial() {
        let generator = VideoGenerator::demo();
        let assets = generator.generate(&sample_context(), None).await.unwrap();

        assert_eq!(assets.len(), 3);
        assert!(assets.iter().all(|a| a.modality == Modality::Video));
        assert!(assets.iter().all(|a| a.thumbnail_url.is_some()));
    }

    #[tokio::test]
    async fn duration_override_shapes_demo_sizes() {
        let generator = VideoGenerator::demo();
        let requirements = VideoRequirements {
            count: Some(2),
            duration_secs: Some(10.0),
            quality: None,
        };

        let assets = generator
            .generate(&sample_context(), Some(&requirements))
            .await
            .unwrap();

        assert_eq!(assets.len(), 2);
        assert!(assets.iter().all(|a| a.metadata.size_bytes == 10_000_000));
    }

    #[tokio::test]
    async fn invalid_context_is_rejected() {
        let mut ctx = sample_context();
        ctx.description = String::new();

        let error = VideoGenerator::demo().generate(&ctx, None).await.unwrap_err();
        assert!(matches!(error, ProviderError::Validation(_)));
    }
}
