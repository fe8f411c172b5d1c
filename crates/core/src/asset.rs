//! Generated asset types shared by every generator and the optimizer.

use std::collections::HashMap;

use crate::platform::Platform;
use crate::request::QualityTier;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Modality
// ---------------------------------------------------------------------------

/// The kind of media an asset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Modality {
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "3d")]
    ThreeD,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::ThreeD => "3d",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// Descriptive metadata attached to every generated asset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AssetMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration_secs: Option<f64>,
    pub size_bytes: u64,
    pub format: String,
    pub quality: QualityTier,
    pub prompt: String,
    pub generated_at: Timestamp,
    /// Name of the provider that produced the asset (e.g. `demo-mode`).
    pub provider: String,
}

/// A single generated media asset.
///
/// `optimized_versions` is empty at creation; the optimization engine
/// attaches per-platform variant URLs by returning a new value via
/// [`GeneratedAsset::with_optimized_versions`], never by mutating a shared
/// asset in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedAsset {
    pub id: String,
    pub modality: Modality,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub metadata: AssetMetadata,
    #[serde(default)]
    pub optimized_versions: HashMap<Platform, String>,
}

impl GeneratedAsset {
    /// Return a copy of this asset with the given platform variant map.
    pub fn with_optimized_versions(mut self, versions: HashMap<Platform, String>) -> Self {
        self.optimized_versions = versions;
        self
    }
}
