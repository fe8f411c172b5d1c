//! Quality scoring for optimization outcomes and finished packages.
//!
//! Scores are bounded to `[0, 100]` and non-decreasing with modality
//! presence, platform coverage, and compression achieved.

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// Starting score before bonuses and penalties.
pub const BASE_QUALITY_SCORE: i32 = 80;
/// Bonus when every asset of a modality carries at least one platform variant.
pub const FULL_COVERAGE_BONUS: i32 = 5;
/// Bonus for having at least one image.
pub const IMAGE_PRESENCE_BONUS: i32 = 2;
/// Bonus for having at least one video.
pub const VIDEO_PRESENCE_BONUS: i32 = 2;
/// Bonus for having at least one 3D asset.
pub const THREE_D_PRESENCE_BONUS: i32 = 1;

/// Bonus when the package compression ratio exceeds [`STRONG_COMPRESSION_RATIO`].
pub const STRONG_COMPRESSION_BONUS: i32 = 10;
/// Additional bonus when the ratio exceeds [`EXCELLENT_COMPRESSION_RATIO`].
pub const EXCELLENT_COMPRESSION_BONUS: i32 = 5;
pub const STRONG_COMPRESSION_RATIO: f64 = 0.3;
pub const EXCELLENT_COMPRESSION_RATIO: f64 = 0.5;

/// Penalty when the whole pipeline takes longer than [`SLOW_PIPELINE_MS`].
pub const SLOW_PIPELINE_PENALTY: i32 = 5;
pub const SLOW_PIPELINE_MS: u64 = 120_000;

/// Package-level bonus per modality that ended up with at least one asset.
pub const PACKAGE_VARIETY_BONUS: i32 = 5;

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// How many assets of one modality exist and how many carry at least one
/// optimized platform variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalityCoverage {
    pub total: usize,
    pub optimized: usize,
}

impl ModalityCoverage {
    pub fn new(total: usize, optimized: usize) -> Self {
        Self { total, optimized }
    }

    /// True when every asset is optimized. Vacuously true for an empty
    /// modality, so absent modalities never cost coverage points.
    pub fn fully_optimized(self) -> bool {
        self.optimized >= self.total
    }

    pub fn is_present(self) -> bool {
        self.total > 0
    }
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Score the optimization outcome itself, before package-level adjustments.
pub fn optimization_quality_score(
    images: ModalityCoverage,
    videos: ModalityCoverage,
    assets_3d: ModalityCoverage,
) -> u8 {
    let mut score = BASE_QUALITY_SCORE;

    for coverage in [images, videos, assets_3d] {
        if coverage.fully_optimized() {
            score += FULL_COVERAGE_BONUS;
        }
    }

    if images.is_present() {
        score += IMAGE_PRESENCE_BONUS;
    }
    if videos.is_present() {
        score += VIDEO_PRESENCE_BONUS;
    }
    if assets_3d.is_present() {
        score += THREE_D_PRESENCE_BONUS;
    }

    clamp_score(score)
}

/// Adjust an optimization score into the final package score using modality
/// variety, the achieved compression ratio, and total wall-clock time.
///
/// `present_modalities` counts how many of the three modalities ended up with
/// at least one asset in the package.
pub fn package_quality_score(
    base: u8,
    present_modalities: u8,
    compression_ratio: f64,
    total_time_ms: u64,
) -> u8 {
    let mut score = i32::from(base);

    score += PACKAGE_VARIETY_BONUS * i32::from(present_modalities.min(3));

    if compression_ratio > STRONG_COMPRESSION_RATIO {
        score += STRONG_COMPRESSION_BONUS;
    }
    if compression_ratio > EXCELLENT_COMPRESSION_RATIO {
        score += EXCELLENT_COMPRESSION_BONUS;
    }
    if total_time_ms > SLOW_PIPELINE_MS {
        score -= SLOW_PIPELINE_PENALTY;
    }

    clamp_score(score)
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- optimization_quality_score --

    #[test]
    fn empty_batch_scores_base_plus_vacuous_coverage() {
        // All three coverages are vacuously full, no presence bonuses.
        let score = optimization_quality_score(
            ModalityCoverage::default(),
            ModalityCoverage::default(),
            ModalityCoverage::default(),
        );
        assert_eq!(score, 95);
    }

    #[test]
    fn fully_optimized_batch_hits_ceiling() {
        let score = optimization_quality_score(
            ModalityCoverage::new(5, 5),
            ModalityCoverage::new(3, 3),
            ModalityCoverage::new(3, 3),
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn partial_coverage_loses_modality_bonus() {
        let score = optimization_quality_score(
            ModalityCoverage::new(5, 4),
            ModalityCoverage::new(3, 3),
            ModalityCoverage::new(3, 3),
        );
        // 80 + 5 + 5 (videos, 3d full) + 2 + 2 + 1 presence = 95.
        assert_eq!(score, 95);
    }

    #[test]
    fn score_non_decreasing_with_presence() {
        let without = optimization_quality_score(
            ModalityCoverage::new(2, 2),
            ModalityCoverage::default(),
            ModalityCoverage::default(),
        );
        let with = optimization_quality_score(
            ModalityCoverage::new(2, 2),
            ModalityCoverage::new(1, 1),
            ModalityCoverage::default(),
        );
        assert!(with >= without);
    }

    #[test]
    fn demo_batch_meets_floor() {
        // One asset per modality, all optimized: the minimum realistic run.
        let score = optimization_quality_score(
            ModalityCoverage::new(1, 1),
            ModalityCoverage::new(1, 1),
            ModalityCoverage::new(1, 1),
        );
        assert!(score >= 80);
    }

    // -- package_quality_score --

    #[test]
    fn weak_compression_keeps_base() {
        assert_eq!(package_quality_score(85, 0, 0.2, 1_000), 85);
    }

    #[test]
    fn variety_bonus_per_present_modality() {
        assert_eq!(package_quality_score(70, 1, 0.0, 0), 75);
        assert_eq!(package_quality_score(70, 2, 0.0, 0), 80);
        assert_eq!(package_quality_score(70, 3, 0.0, 0), 85);
    }

    #[test]
    fn variety_capped_at_three_modalities() {
        assert_eq!(
            package_quality_score(70, 9, 0.0, 0),
            package_quality_score(70, 3, 0.0, 0)
        );
    }

    #[test]
    fn strong_compression_adds_ten() {
        assert_eq!(package_quality_score(85, 0, 0.31, 1_000), 95);
    }

    #[test]
    fn excellent_compression_adds_fifteen() {
        assert_eq!(package_quality_score(80, 0, 0.51, 1_000), 95);
    }

    #[test]
    fn ratio_boundaries_are_exclusive() {
        assert_eq!(
            package_quality_score(80, 0, STRONG_COMPRESSION_RATIO, 0),
            80
        );
        assert_eq!(
            package_quality_score(80, 0, EXCELLENT_COMPRESSION_RATIO, 0),
            90
        );
    }

    #[test]
    fn slow_pipeline_penalized() {
        assert_eq!(package_quality_score(85, 0, 0.0, SLOW_PIPELINE_MS + 1), 80);
        assert_eq!(package_quality_score(85, 0, 0.0, SLOW_PIPELINE_MS), 85);
    }

    #[test]
    fn score_clamped_to_hundred() {
        assert_eq!(package_quality_score(100, 3, 0.9, 0), 100);
    }

    #[test]
    fn score_never_negative() {
        assert_eq!(package_quality_score(0, 0, 0.0, SLOW_PIPELINE_MS + 1), 0);
    }
}
