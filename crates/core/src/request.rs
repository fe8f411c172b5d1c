//! Media generation request types and validation.
//!
//! A [`MediaGenerationRequest`] is the single input to the pipeline. It is
//! validated once during pipeline initialization and treated as immutable
//! afterwards; generators re-check the same constraints at their own boundary.

use crate::error::CoreError;
use crate::platform::Platform;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum explicitly requested assets per modality.
pub const MAX_ASSETS_PER_MODALITY: usize = 24;

// ---------------------------------------------------------------------------
// Quality / complexity tiers
// ---------------------------------------------------------------------------

/// Requested output quality tier for a generated asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Draft,
    #[default]
    Standard,
    Premium,
    Ultra,
}

impl QualityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Ultra => "ultra",
        }
    }
}

/// Geometric complexity of a requested 3D asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Pixel dimensions of a requested image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Optional overrides for the image generator's default plan.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageRequirements {
    pub count: Option<u32>,
    /// Cycled across planned assets when present.
    pub dimensions: Option<Vec<Dimensions>>,
}

/// Optional overrides for the video generator's default plan.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoRequirements {
    pub count: Option<u32>,
    pub duration_secs: Option<f64>,
    pub quality: Option<QualityTier>,
}

/// Optional overrides for the 3D generator's default plan.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThreeDRequirements {
    pub count: Option<u32>,
    pub complexity: Option<Complexity>,
}

/// Per-modality requirement overrides. Absent blocks use generator defaults.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaRequirements {
    pub images: Option<ImageRequirements>,
    pub videos: Option<VideoRequirements>,
    pub assets_3d: Option<ThreeDRequirements>,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Input to a full pipeline run. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaGenerationRequest {
    pub app_name: String,
    pub category: String,
    pub description: String,
    pub target_platforms: Vec<Platform>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub requirements: Option<MediaRequirements>,
}

impl MediaGenerationRequest {
    /// Validate the request. Rejected requests never reach a generator.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.app_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Application name must not be empty".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Description must not be empty".to_string(),
            ));
        }
        if self.target_platforms.is_empty() {
            return Err(CoreError::Validation(
                "At least one target platform is required".to_string(),
            ));
        }
        if let Some(requirements) = &self.requirements {
            requirements.validate()?;
        }
        Ok(())
    }

    /// Target platforms with duplicates removed, first occurrence wins.
    pub fn normalized_platforms(&self) -> Vec<Platform> {
        let mut seen = Vec::with_capacity(self.target_platforms.len());
        for &platform in &self.target_platforms {
            if !seen.contains(&platform) {
                seen.push(platform);
            }
        }
        seen
    }

    /// The request theme, or the house default when absent.
    pub fn theme_or_default(&self) -> Theme {
        self.theme.clone().unwrap_or_default()
    }

    /// Render the master prompt recorded in package metadata.
    pub fn master_prompt(&self) -> String {
        let theme = self.theme_or_default();
        let platforms = self
            .normalized_platforms()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Application: {} | Category: {} | Description: {} | Platforms: {} | Theme: {} style | Colors: {} and {}",
            self.app_name.trim(),
            self.category.trim(),
            self.description.trim(),
            platforms,
            theme.style.as_str(),
            theme.primary_color,
            theme.secondary_color,
        )
    }
}

impl MediaRequirements {
    /// Validate every explicit override.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(images) = &self.images {
            if let Some(count) = images.count {
                validate_asset_count(count as usize, "image")?;
            }
            if let Some(dimensions) = &images.dimensions {
                for dims in dimensions {
                    if dims.width == 0 || dims.height == 0 {
                        return Err(CoreError::Validation(format!(
                            "Image dimensions must be greater than 0 (got {dims})"
                        )));
                    }
                }
            }
        }
        if let Some(videos) = &self.videos {
            if let Some(count) = videos.count {
                validate_asset_count(count as usize, "video")?;
            }
            if let Some(duration) = videos.duration_secs {
                if !duration.is_finite() || duration <= 0.0 {
                    return Err(CoreError::Validation(format!(
                        "Video duration must be greater than 0 seconds, got {duration}"
                    )));
                }
            }
        }
        if let Some(assets_3d) = &self.assets_3d {
            if let Some(count) = assets_3d.count {
                validate_asset_count(count as usize, "3D asset")?;
            }
        }
        Ok(())
    }
}

/// Validate an explicitly requested per-modality asset count.
pub fn validate_asset_count(count: usize, what: &str) -> Result<(), CoreError> {
    if count == 0 {
        return Err(CoreError::Validation(format!(
            "Requested {what} count must be greater than 0"
        )));
    }
    if count > MAX_ASSETS_PER_MODALITY {
        return Err(CoreError::Validation(format!(
            "Requested {what} count must not exceed {MAX_ASSETS_PER_MODALITY} (got {count})"
        )));
    }
    Ok(())
}
