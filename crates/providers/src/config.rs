//! Environment-driven configuration for the generator clients.

use mediaforge_core::asset::Modality;

/// API key value that forces demo mode even when set.
pub const DEMO_KEY_SENTINEL: &str = "demo-key";

/// Default base URL of the hosted generation service.
pub const DEFAULT_API_URL: &str = "https://api.runwayml.com/v1";

/// Default image generation model.
pub const DEFAULT_IMAGE_MODEL: &str = "flux-pro-1.1";
/// Default video generation model.
pub const DEFAULT_VIDEO_MODEL: &str = "runway-gen3-alpha";
/// Default 3D generation model.
pub const DEFAULT_THREE_D_MODEL: &str = "meshy-ai-v3";

/// Generator configuration loaded from environment variables.
///
/// Without a usable `MEDIAFORGE_API_KEY` the clients run in demo mode and
/// never touch the network.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Bearer credential for the generation service. Absent, empty, or
    /// equal to [`DEMO_KEY_SENTINEL`] selects demo mode.
    pub api_key: Option<String>,
    /// Base HTTP URL of the generation service.
    pub api_url: String,
    /// Model identifier for image generation.
    pub image_model: String,
    /// Model identifier for video generation.
    pub video_model: String,
    /// Model identifier for 3D generation.
    pub three_d_model: String,
}

impl GeneratorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                       |
    /// |--------------------------|-------------------------------|
    /// | `MEDIAFORGE_API_KEY`     | unset (demo mode)             |
    /// | `MEDIAFORGE_API_URL`     | `https://api.runwayml.com/v1` |
    /// | `MEDIAFORGE_IMAGE_MODEL` | `flux-pro-1.1`                |
    /// | `MEDIAFORGE_VIDEO_MODEL` | `runway-gen3-alpha`           |
    /// | `MEDIAFORGE_3D_MODEL`    | `meshy-ai-v3`                 |
    pub fn from_env() -> Self {
        let api_key = std::env::var("MEDIAFORGE_API_KEY").ok();
        let api_url =
            std::env::var("MEDIAFORGE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let image_model =
            std::env::var("MEDIAFORGE_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());
        let video_model =
            std::env::var("MEDIAFORGE_VIDEO_MODEL").unwrap_or_else(|_| DEFAULT_VIDEO_MODEL.into());
        let three_d_model =
            std::env::var("MEDIAFORGE_3D_MODEL").unwrap_or_else(|_| DEFAULT_THREE_D_MODEL.into());

        Self {
            api_key,
            api_url,
            image_model,
            video_model,
            three_d_model,
        }
    }

    /// True when no usable live credential is configured.
    pub fn is_demo(&self) -> bool {
        match &self.api_key {
            None => true,
            Some(key) => key.is_empty() || key == DEMO_KEY_SENTINEL,
        }
    }

    /// Model identifier used for a modality's live generation calls.
    pub fn model_for(&self, modality: Modality) -> &str {
        match modality {
            Modality::Image => &self.image_model,
            Modality::Video => &self.video_model,
            Modality::ThreeD => &self.three_d_model,
        }
    }
}
