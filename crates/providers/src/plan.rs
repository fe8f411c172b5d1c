//! Asset plan expansion and prompt construction.
//!
//! A generator client expands its modality's default plan rows into
//! [`AssetPlan`]s before driving a backend. Prompts embed the plan's kind
//! keyword so the optimizer's prompt classifier lands every asset in its
//! intended bucket.

use mediaforge_core::asset::Modality;
use mediaforge_core::error::CoreError;
use mediaforge_core::platform::Platform;
use mediaforge_core::request::{
    Complexity, Dimensions, ImageRequirements, MediaGenerationRequest, QualityTier,
    ThreeDRequirements, VideoRequirements,
};
use mediaforge_core::theme::{Theme, ThemeStyle};

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Request-scoped inputs shared by every generator client.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationContext {
    pub app_name: String,
    pub category: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    pub theme: Theme,
}

impl GenerationContext {
    /// Build a context from a request, trimming free text, deduplicating
    /// platforms, and applying the house theme when none was given.
    pub fn from_request(request: &MediaGenerationRequest) -> Self {
        Self {
            app_name: request.app_name.trim().to_string(),
            category: request.category.trim().to_string(),
            description: request.description.trim().to_string(),
            platforms: request.normalized_platforms(),
            theme: request.theme_or_default(),
        }
    }

    /// Contract checks re-run at the client boundary.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
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
        if self.platforms.is_empty() {
            return Err(CoreError::Validation(
                "At least one target platform is required".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// Blueprint for one asset a generator client will produce.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPlan {
    pub modality: Modality,
    /// Role slug for the asset (`hero`, `screenshot-home`, ...). Seeds demo
    /// URLs; its leading keyword also appears in the prompt.
    pub kind: &'static str,
    pub prompt: String,
    pub dimensions: Option<Dimensions>,
    pub duration_secs: Option<f64>,
    pub complexity: Option<Complexity>,
    pub quality: QualityTier,
    pub style: ThemeStyle,
    pub format: &'static str,
}

struct ImageRow {
    kind: &'static str,
    dimensions: Dimensions,
    quality: QualityTier,
    format: &'static str,
}

/// Default image plan: one hero shot, two screens, an icon, a background.
const IMAGE_ROWS: [ImageRow; 5] = [
    ImageRow {
        kind: "hero",
        dimensions: Dimensions {
            width: 1920,
            height: 1080,
        },
        quality: QualityTier::Premium,
        format: "webp",
    },
    ImageRow {
        kind: "screenshot-home",
        dimensions: Dimensions {
            width: 1080,
            height: 1920,
        },
        quality: QualityTier::Standard,
        format: "webp",
    },
    ImageRow {
        kind: "screenshot-dashboard",
        dimensions: Dimensions {
            width: 1080,
            height: 1920,
        },
        quality: QualityTier::Standard,
        format: "webp",
    },
    ImageRow {
        kind: "icon",
        dimensions: Dimensions {
            width: 512,
            height: 512,
        },
        quality: QualityTier::Premium,
        format: "png",
    },
    ImageRow {
        kind: "background",
        dimensions: Dimensions {
            width: 1920,
            height: 1080,
        },
        quality: QualityTier::Standard,
        format: "webp",
    },
];

struct VideoRow {
    kind: &'static str,
    duration_secs: f64,
    quality: QualityTier,
    format: &'static str,
}

/// Default video plan: hero cut, feature demo, tutorial.
const VIDEO_ROWS: [VideoRow; 3] = [
    VideoRow {
        kind: "hero",
        duration_secs: 30.0,
        quality: QualityTier::Premium,
        format: "mp4",
    },
    VideoRow {
        kind: "demo",
        duration_secs: 60.0,
        quality: QualityTier::Standard,
        format: "mp4",
    },
    VideoRow {
        kind: "tutorial",
        duration_secs: 90.0,
        quality: QualityTier::Standard,
        format: "mp4",
    },
];

struct ThreeDRow {
    kind: &'static str,
    complexity: Complexity,
    format: &'static str,
}

/// Default 3D plan: showcase scene, product model, ambient environment.
const THREE_D_ROWS: [ThreeDRow; 3] = [
    ThreeDRow {
        kind: "scene",
        complexity: Complexity::High,
        format: "gltf",
    },
    ThreeDRow {
        kind: "model",
        complexity: Complexity::Medium,
        format: "gltf",
    },
    ThreeDRow {
        kind: "environment",
        complexity: Complexity::Medium,
        format: "gltf",
    },
];

/// Expand the image plan for a context, honoring requirement overrides.
///
/// An explicit `count` cycles the default kind sequence; explicit dimensions
/// cycle per plan in the order given.
pub fn image_plans(
    ctx: &GenerationContext,
    requirements: Option<&ImageRequirements>,
) -> Vec<AssetPlan> {
    let count = requirements
        .and_then(|r| r.count)
        .map(|c| c as usize)
        .unwrap_or(IMAGE_ROWS.len());
    let dimension_overrides = requirements.and_then(|r| r.dimensions.as_deref());

    (0..count)
        .map(|index| {
            let row = &IMAGE_ROWS[index % IMAGE_ROWS.len()];
            let dimensions = dimension_overrides
                .filter(|dims| !dims.is_empty())
                .map(|dims| dims[index % dims.len()])
                .unwrap_or(row.dimensions);
            AssetPlan {
                modality: Modality::Image,
                kind: row.kind,
                prompt: image_prompt(row.kind, ctx),
                dimensions: Some(dimensions),
                duration_secs: None,
                complexity: None,
                quality: row.quality,
                style: ctx.theme.style,
                format: row.format,
            }
        })
        .collect()
}

/// Expand the video plan for a context, honoring requirement overrides.
pub fn video_plans(
    ctx: &GenerationContext,
    requirements: Option<&VideoRequirements>,
) -> Vec<AssetPlan> {
    let count = requirements
        .and_then(|r| r.count)
        .map(|c| c as usize)
        .unwrap_or(VIDEO_ROWS.len());
    let duration_override = requirements.and_then(|r| r.duration_secs);
    let quality_override = requirements.and_then(|r| r.quality);

    (0..count)
        .map(|index| {
            let row = &VIDEO_ROWS[index % VIDEO_ROWS.len()];
            let duration = duration_override.unwrap_or(row.duration_secs);
            AssetPlan {
                modality: Modality::Video,
                kind: row.kind,
                prompt: video_prompt(row.kind, duration, ctx),
                dimensions: None,
                duration_secs: Some(duration),
                complexity: None,
                quality: quality_override.unwrap_or(row.quality),
                style: ctx.theme.style,
                format: row.format,
            }
        })
        .collect()
}

/// Expand the 3D plan for a context, honoring requirement overrides.
pub fn three_d_plans(
    ctx: &GenerationContext,
    requirements: Option<&ThreeDRequirements>,
) -> Vec<AssetPlan> {
    let count = requirements
        .and_then(|r| r.count)
        .map(|c| c as usize)
        .unwrap_or(THREE_D_ROWS.len());
    let complexity_override = requirements.and_then(|r| r.complexity);

    (0..count)
        .map(|index| {
            let row = &THREE_D_ROWS[index % THREE_D_ROWS.len()];
            AssetPlan {
                modality: Modality::ThreeD,
                kind: row.kind,
                prompt: three_d_prompt(row.kind, ctx),
                dimensions: None,
                duration_secs: None,
                complexity: Some(complexity_override.unwrap_or(row.complexity)),
                quality: QualityTier::Premium,
                style: ctx.theme.style,
                format: row.format,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Prompt builders
// ---------------------------------------------------------------------------

// Each prompt must contain its own kind keyword and avoid every keyword that
// outranks it in the classifier's priority list. User-supplied text can still
// collide with a keyword; that is a known limitation of the heuristic.

fn image_prompt(kind: &str, ctx: &GenerationContext) -> String {
    let style = ctx.theme.style.as_str();
    let primary = &ctx.theme.primary_color;
    let secondary = &ctx.theme.secondary_color;
    match kind {
        "hero" => format!(
            "Professional hero image for the {} {} application. {}. {} design in {} and {}, premium lighting.",
            ctx.app_name, ctx.category, ctx.description, style, primary, secondary
        ),
        "screenshot-home" => format!(
            "Home screen screenshot mockup for {}. Clean {} layout in {} with {} accents.",
            ctx.app_name, style, primary, secondary
        ),
        "screenshot-dashboard" => format!(
            "Dashboard screen screenshot mockup for {}. Data-dense {} layout in {} with {} accents.",
            ctx.app_name, style, primary, secondary
        ),
        "icon" => format!(
            "App icon for {} in the {} category. Flat {} mark in {} and {}, clean silhouette.",
            ctx.app_name, ctx.category, style, primary, secondary
        ),
        "background" => format!(
            "Abstract background for {}. Soft {} gradients blending {} into {}, seamless tiling.",
            ctx.app_name, style, primary, secondary
        ),
        _ => format!("{} visual for the {} application, {} style.", kind, ctx.app_name, style),
    }
}

fn video_prompt(kind: &str, duration_secs: f64, ctx: &GenerationContext) -> String {
    let style = ctx.theme.style.as_str();
    match kind {
        "hero" => format!(
            "Hero promo video for {}. Sweeping {} motion in {} and {}, {:.0} second cut.",
            ctx.app_name,
            style,
            ctx.theme.primary_color,
            ctx.theme.secondary_color,
            duration_secs
        ),
        "demo" => format!(
            "Feature demo video for {}. Smooth tour of the {} experience, {} pacing, {:.0} seconds.",
            ctx.app_name, ctx.category, style, duration_secs
        ),
        "tutorial" => format!(
            "Tutorial video for {}. Step by step guide to the {} workflow, captioned, {:.0} seconds.",
            ctx.app_name, ctx.category, duration_secs
        ),
        _ => format!(
            "{} video for the {} application, {:.0} seconds, {} style.",
            kind, ctx.app_name, duration_secs, style
        ),
    }
}

fn three_d_prompt(kind: &str, ctx: &GenerationContext) -> String {
    let style = ctx.theme.style.as_str();
    match kind {
        "scene" => format!(
            "Interactive 3D scene for {}. Floating {} panels over a {} and {} backdrop.",
            ctx.app_name, style, ctx.theme.primary_color, ctx.theme.secondary_color
        ),
        "model" => format!(
            "Showcase 3D model of the {} product. Clean {} geometry with {} accent trim.",
            ctx.app_name, style, ctx.theme.secondary_color
        ),
        "environment" => format!(
            "Ambient 3D environment for {}. Expansive {} setting lit in {} tones.",
            ctx.app_name, ctx.category, ctx.theme.primary_color
        ),
        _ => format!("{} 3D asset for the {} application, {} style.", kind, ctx.app_name, style),
    }
}
