//! Fixed per-platform optimization profiles.
//!
//! One profile per platform and modality. VR is the highest-fidelity target
//! and mobile the most aggressively reduced; the table is fixed and applied
//! uniformly to every asset of the matching modality.

use crate::platform::Platform;

// ---------------------------------------------------------------------------
// Profile types
// ---------------------------------------------------------------------------

/// Resize/compress parameters for image optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ImageProfile {
    pub max_width: u32,
    pub max_height: u32,
    /// Compression quality, 0-100.
    pub quality: u8,
}

/// Transcode parameters for video optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct VideoProfile {
    pub resolution: &'static str,
    pub bitrate: &'static str,
    pub codec: &'static str,
}

/// Mesh/texture parameters for 3D optimization.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MeshProfile {
    /// Fraction of vertices to remove, 0.0 (none) to 1.0.
    pub vertex_reduction: f64,
    /// Target texture edge length in pixels.
    pub texture_size: u32,
    pub compression: &'static str,
}

// ---------------------------------------------------------------------------
// Lookup table
// ---------------------------------------------------------------------------

/// Image profile for a platform.
pub fn image_profile(platform: Platform) -> ImageProfile {
    match platform {
        Platform::Web => ImageProfile {
            max_width: 1920,
            max_height: 1080,
            quality: 85,
        },
        Platform::Mobile => ImageProfile {
            max_width: 1080,
            max_height: 1920,
            quality: 75,
        },
        Platform::Desktop => ImageProfile {
            max_width: 2560,
            max_height: 1440,
            quality: 90,
        },
        Platform::Vr => ImageProfile {
            max_width: 4096,
            max_height: 4096,
            quality: 95,
        },
    }
}

/// Video profile for a platform.
pub fn video_profile(platform: Platform) -> VideoProfile {
    match platform {
        Platform::Web => VideoProfile {
            resolution: "1080p",
            bitrate: "2M",
            codec: "h264",
        },
        Platform::Mobile => VideoProfile {
            resolution: "720p",
            bitrate: "1M",
            codec: "h264",
        },
        Platform::Desktop => VideoProfile {
            resolution: "1440p",
            bitrate: "4M",
            codec: "h265",
        },
        Platform::Vr => VideoProfile {
            resolution: "4K",
            bitrate: "8M",
            codec: "h265",
        },
    }
}

/// Mesh profile for a platform.
pub fn mesh_profile(platform: Platform) -> MeshProfile {
    match platform {
        Platform::Web => MeshProfile {
            vertex_reduction: 0.3,
            texture_size: 1024,
            compression: "draco",
        },
        Platform::Mobile => MeshProfile {
            vertex_reduction: 0.5,
            texture_size: 512,
            compression: "draco",
        },
        Platform::Desktop => MeshProfile {
            vertex_reduction: 0.1,
            texture_size: 2048,
            compression: "minimal",
        },
        Platform::Vr => MeshProfile {
            vertex_reduction: 0.0,
            texture_size: 4096,
            compression: "none",
        },
    }
}
