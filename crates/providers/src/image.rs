//! Image generator client.

use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::request::ImageRequirements;

use crate::backend::GenerationBackend;
use crate::config::GeneratorConfig;
use crate::demo::{demo_asset, DemoBackend};
use crate::error::ProviderError;
use crate::live::LiveBackend;
use crate::plan::{image_plans, GenerationContext};

/// Generator client for still images.
///
/// Expands the image plan for a request context and drives the configured
/// backend one plan at a time. A failing backend call degrades to the
/// deterministic demo asset for that plan, so the batch always completes.
pub struct ImageGenerator {
    backend: Box<dyn GenerationBackend>,
}

impl ImageGenerator {
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

    /// Generate the planned images for a request context.
    pub async fn generate(
        &self,
        ctx: &GenerationContext,
        requirements: Option<&ImageRequirements>,
    ) -> Result<Vec<GeneratedAsset>, ProviderError> {
        ctx.ensure_valid()?;

        let plans = image_plans(ctx, requirements);
        let mut assets = Vec::with_capacity(plans.len());
        for plan in &plans {
            let asset = match self.backend.generate(plan).await {
                Ok(asset) => asset,
                Err(error) => {
                    tracing::warn!(
                        backend = self.backend.name(),
                        kind = plan.kind,
                        %error,
                        "Image generation failed, falling back to demo asset"
                    );
                    demo_asset(plan)
                }
            };
            assets.push(asset);
        }

        tracing::debug!(count = assets.len(), "Generated image batch");
        Ok(assets)
    }
}
