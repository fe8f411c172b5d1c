//! Package-level analytics helpers.

use std::collections::HashMap;

use crate::asset::GeneratedAsset;

/// Analytics record embedded in every finished package.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PackageAnalytics {
    pub total_generation_time_ms: u64,
    pub total_asset_count: u32,
    pub total_size_bytes: u64,
    pub optimized_size_bytes: u64,
    pub compression_ratio: f64,
    pub quality_score: u8,
    /// Asset count per provider name; values sum to `total_asset_count`.
    pub provider_usage: HashMap<String, u32>,
}

/// Fraction of bytes removed by optimization. Zero when nothing was there
/// to optimize.
pub fn compression_ratio(total_size_bytes: u64, optimized_size_bytes: u64) -> f64 {
    if total_size_bytes == 0 {
        return 0.0;
    }
    let saved = total_size_bytes.saturating_sub(optimized_size_bytes);
    saved as f64 / total_size_bytes as f64
}

/// Count assets per provider name across every generated asset.
pub fn provider_usage<'a>(
    assets: impl IntoIterator<Item = &'a GeneratedAsset>,
) -> HashMap<String, u32> {
    let mut usage: HashMap<String, u32> = HashMap::new();
    for asset in assets {
        *usage.entry(asset.metadata.provider.clone()).or_insert(0) += 1;
    }
    usage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetMetadata, Modality};
    use crate::request::QualityTier;

    fn asset_from(provider: &str) -> GeneratedAsset {
        GeneratedAsset {
            id: format!("asset-{provider}"),
            modality: Modality::Image,
            url: "https://cdn.example.com/a.webp".to_string(),
            thumbnail_url: None,
            metadata: AssetMetadata {
                width: Some(512),
                height: Some(512),
                duration_secs: None,
                size_bytes: 1024,
                format: "webp".to_string(),
                quality: QualityTier::Standard,
                prompt: "icon".to_string(),
                generated_at: chrono::Utc::now(),
                provider: provider.to_string(),
            },
            optimized_versions: Default::default(),
        }
    }

    // -- compression_ratio --

    #[test]
    fn ratio_zero_for_empty_total() {
        assert_eq!(compression_ratio(0, 0), 0.0);
    }

    #[test]
    fn ratio_zero_when_nothing_saved() {
        assert_eq!(compression_ratio(1000, 1000), 0.0);
    }

    #[test]
    fn ratio_reflects_bytes_saved() {
        assert!((compression_ratio(1000, 700) - 0.3).abs() < 1e-9);
        assert!((compression_ratio(1000, 400) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn ratio_saturates_when_optimized_exceeds_total() {
        // Callers clamp per-asset sizes, but the ratio still never goes
        // negative if they do not.
        assert_eq!(compression_ratio(1000, 1200), 0.0);
    }

    // -- provider_usage --

    #[test]
    fn usage_counts_per_provider() {
        let assets = vec![
            asset_from("flux-pro"),
            asset_from("flux-pro"),
            asset_from("demo-mode"),
        ];
        let usage = provider_usage(&assets);
        assert_eq!(usage.get("flux-pro"), Some(&2));
        assert_eq!(usage.get("demo-mode"), Some(&1));
        assert_eq!(usage.values().sum::<u32>(), 3);
    }

    #[test]
    fn usage_empty_for_no_assets() {
        let assets: Vec<GeneratedAsset> = Vec::new();
        assert!(provider_usage(&assets).is_empty());
    }
}
