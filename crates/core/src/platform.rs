//! Target platform enum and parsing.
//!
//! Platforms drive the optimization profile table and the per-platform
//! variant maps on generated assets.

use crate::error::CoreError;

/// A delivery target for optimized media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
    Desktop,
    Vr,
}

/// All supported platforms, in default priority order.
pub const ALL_PLATFORMS: [Platform; 4] = [
    Platform::Web,
    Platform::Mobile,
    Platform::Desktop,
    Platform::Vr,
];

impl Platform {
    /// Wire / display name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Vr => "vr",
        }
    }

    /// Parse a platform name (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            "vr" => Ok(Self::Vr),
            other => Err(CoreError::Validation(format!(
                "Unknown platform: '{other}'. Valid platforms: web, mobile, desktop, vr"
            ))),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a comma-separated platform list, e.g. `"web,mobile"`.
pub fn parse_platform_list(list: &str) -> Result<Vec<Platform>, CoreError> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(Platform::parse)
        .collect()
}
