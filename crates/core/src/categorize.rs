//! Prompt-keyword asset categorization.
//!
//! Each asset lands in exactly one bucket of the optimized package. The
//! classifier is a lowercase substring match against a fixed keyword list,
//! first match wins; assets matching nothing fall into the per-modality
//! default bucket. Ambiguous prompts resolving by list order is a known
//! limitation of the heuristic, kept deliberately.

// ---------------------------------------------------------------------------
// Image buckets
// ---------------------------------------------------------------------------

/// Bucket for an optimized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageCategory {
    Hero,
    Screenshots,
    Icons,
    Backgrounds,
    Thumbnails,
}

/// Image keywords in match-priority order.
pub const IMAGE_KEYWORDS: [(&str, ImageCategory); 5] = [
    ("hero", ImageCategory::Hero),
    ("screenshot", ImageCategory::Screenshots),
    ("icon", ImageCategory::Icons),
    ("background", ImageCategory::Backgrounds),
    ("thumbnail", ImageCategory::Thumbnails),
];

impl ImageCategory {
    /// Classify an image by its generation prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        match_keyword(prompt, &IMAGE_KEYWORDS, Self::Screenshots)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Screenshots => "screenshots",
            Self::Icons => "icons",
            Self::Backgrounds => "backgrounds",
            Self::Thumbnails => "thumbnails",
        }
    }
}

// ---------------------------------------------------------------------------
// Video buckets
// ---------------------------------------------------------------------------

/// Bucket for an optimized video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoCategory {
    Hero,
    Demo,
    Tutorial,
    Loading,
    Transitions,
}

/// Video keywords in match-priority order.
pub const VIDEO_KEYWORDS: [(&str, VideoCategory); 5] = [
    ("hero", VideoCategory::Hero),
    ("demo", VideoCategory::Demo),
    ("tutorial", VideoCategory::Tutorial),
    ("loading", VideoCategory::Loading),
    ("transition", VideoCategory::Transitions),
];

impl VideoCategory {
    /// Classify a video by its generation prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        match_keyword(prompt, &VIDEO_KEYWORDS, Self::Demo)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Demo => "demo",
            Self::Tutorial => "tutorial",
            Self::Loading => "loading",
            Self::Transitions => "transitions",
        }
    }
}

// ---------------------------------------------------------------------------
// 3D buckets
// ---------------------------------------------------------------------------

/// Bucket for an optimized 3D asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreeDCategory {
    Scenes,
    Models,
    Environments,
    Animations,
}

/// 3D keywords in match-priority order. "model" is matched last since it
/// appears inside many compound prompts ("environment model", ...).
pub const THREE_D_KEYWORDS: [(&str, ThreeDCategory); 4] = [
    ("scene", ThreeDCategory::Scenes),
    ("environment", ThreeDCategory::Environments),
    ("animation", ThreeDCategory::Animations),
    ("model", ThreeDCategory::Models),
];

impl ThreeDCategory {
    /// Classify a 3D asset by its generation prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        match_keyword(prompt, &THREE_D_KEYWORDS, Self::Models)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scenes => "scenes",
            Self::Models => "models",
            Self::Environments => "environments",
            Self::Animations => "animations",
        }
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

fn match_keyword<C: Copy>(prompt: &str, keywords: &[(&str, C)], default: C) -> C {
    let lowered = prompt.to_lowercase();
    keywords
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, category)| category)
        .unwrap_or(default)
}
