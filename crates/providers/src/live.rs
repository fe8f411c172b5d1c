//! Live generation backend over the hosted HTTP API.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use mediaforge_core::asset::{AssetMetadata, GeneratedAsset, Modality};
use mediaforge_core::theme::ThemeStyle;

use crate::api::GenerationApi;
use crate::backend::GenerationBackend;
use crate::config::GeneratorConfig;
use crate::error::ProviderError;
use crate::plan::AssetPlan;

/// Provider name credited for live-generated assets of a modality.
pub fn live_provider(modality: Modality) -> &'static str {
    match modality {
        Modality::Image => "flux-pro",
        Modality::Video => "runway-gen3",
        Modality::ThreeD => "meshy-ai",
    }
}

/// Style preset identifier sent to the generation endpoints.
fn style_preset(style: ThemeStyle) -> &'static str {
    match style {
        ThemeStyle::Modern => "modern_clean_sharp",
        ThemeStyle::Retro => "retro_vintage_warm",
        ThemeStyle::Minimalist => "minimal_clean_modern",
        ThemeStyle::Glassmorphic => "glass_modern_clean",
        ThemeStyle::Cinematic => "cinematic_dramatic_wide",
    }
}

/// Backend that calls the hosted generation service.
pub struct LiveBackend {
    api: GenerationApi,
    config: GeneratorConfig,
}

impl LiveBackend {
    /// Build a live backend from configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        let api = GenerationApi::new(
            config.api_url.clone(),
            config.api_key.clone().unwrap_or_default(),
        );
        Self { api, config }
    }

    /// Build a live backend reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeneratorConfig) -> Self {
        let api = GenerationApi::with_client(
            client,
            config.api_url.clone(),
            config.api_key.clone().unwrap_or_default(),
        );
        Self { api, config }
    }
}

#[async_trait]
impl GenerationBackend for LiveBackend {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn generate(&self, plan: &AssetPlan) -> Result<GeneratedAsset, ProviderError> {
        let model = self.config.model_for(plan.modality);
        let response = self
            .api
            .generate(plan, model, style_preset(plan.style))
            .await?;

        Ok(GeneratedAsset {
            id: uuid::Uuid::new_v4().to_string(),
            modality: plan.modality,
            url: response.url,
            thumbnail_url: response.thumbnail_url,
            metadata: AssetMetadata {
                width: plan.dimensions.map(|d| d.width),
                height: plan.dimensions.map(|d| d.height),
                duration_secs: plan.duration_secs,
                size_bytes: response.file_size.unwrap_or(0),
                format: plan.format.to_string(),
                quality: plan.quality,
                prompt: plan.prompt.clone(),
                generated_at: Utc::now(),
                provider: live_provider(plan.modality).to_string(),
            },
            optimized_versions: HashMap::new(),
        })
    }
}
