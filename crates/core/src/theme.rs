//! Visual theme for generated assets.
//!
//! A theme carries the two-color palette and a named style that prompt
//! builders and the live generation APIs consume. Requests without a theme
//! fall back to the house palette.

// ---------------------------------------------------------------------------
// Default palette
// ---------------------------------------------------------------------------

/// Default primary color (magenta) used when a request carries no theme.
pub const DEFAULT_PRIMARY_COLOR: &str = "#F92672";
/// Default secondary color (cyan) used when a request carries no theme.
pub const DEFAULT_SECONDARY_COLOR: &str = "#66D9EF";

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Named visual style applied across every generated asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeStyle {
    Modern,
    Retro,
    Minimalist,
    #[default]
    Glassmorphic,
    Cinematic,
}

impl ThemeStyle {
    /// Style name as it appears in prompts and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Retro => "retro",
            Self::Minimalist => "minimalist",
            Self::Glassmorphic => "glassmorphic",
            Self::Cinematic => "cinematic",
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Two-color palette plus style, shared by every generator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub style: ThemeStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            style: ThemeStyle::default(),
        }
    }
}
