//! Pipeline stage machine and progress-window arithmetic.
//!
//! Stage weights live in one declarative table so every stage interpolates
//! its percentage the same way. Windows are contiguous, start at 0, and end
//! at exactly 100 on completion.

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// A stage of the media generation pipeline.
///
/// Stages advance strictly in order; `Failed` is reachable from any
/// non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Initializing,
    GeneratingImages,
    GeneratingVideos,
    #[serde(rename = "generating_3d")]
    Generating3d,
    Optimizing,
    Finalizing,
    Complete,
    Failed,
}

impl PipelineStage {
    /// Human-readable label reported to progress sinks.
    pub fn label(self) -> &'static str {
        match self {
            Self::Initializing => "Pipeline initialization",
            Self::GeneratingImages => "Image generation",
            Self::GeneratingVideos => "Video generation",
            Self::Generating3d => "3D asset generation",
            Self::Optimizing => "Media optimization",
            Self::Finalizing => "Package finalization",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
        }
    }

    /// The next stage on the success path, `None` for terminal stages.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Initializing => Some(Self::GeneratingImages),
            Self::GeneratingImages => Some(Self::GeneratingVideos),
            Self::GeneratingVideos => Some(Self::Generating3d),
            Self::Generating3d => Some(Self::Optimizing),
            Self::Optimizing => Some(Self::Finalizing),
            Self::Finalizing => Some(Self::Complete),
            Self::Complete | Self::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }

    /// Progress window for this stage; `None` for `Failed`, whose percent is
    /// whatever was last reported.
    pub fn window(self) -> Option<StageWindow> {
        let (start, end) = match self {
            Self::Initializing => (0, 10),
            Self::GeneratingImages => (10, 25),
            Self::GeneratingVideos => (25, 50),
            Self::Generating3d => (50, 70),
            Self::Optimizing => (70, 90),
            Self::Finalizing => (90, 100),
            Self::Complete => (100, 100),
            Self::Failed => return None,
        };
        Some(StageWindow { start, end })
    }
}

/// Working stages in execution order (terminal stages excluded).
pub const WORKING_STAGES: [PipelineStage; 6] = [
    PipelineStage::Initializing,
    PipelineStage::GeneratingImages,
    PipelineStage::GeneratingVideos,
    PipelineStage::Generating3d,
    PipelineStage::Optimizing,
    PipelineStage::Finalizing,
];

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// Inclusive percentage window `[start, end]` owned by one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StageWindow {
    pub start: u8,
    pub end: u8,
}

impl StageWindow {
    /// Interpolate a percentage for `fraction` of the way through the
    /// window. The fraction is clamped to `[0.0, 1.0]`.
    pub fn percent_at(self, fraction: f64) -> u8 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let span = f64::from(self.end - self.start);
        self.start + (span * fraction).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- window table --

    #[test]
    fn windows_are_contiguous_from_zero_to_hundred() {
        let mut expected_start = 0;
        for stage in WORKING_STAGES {
            let window = stage.window().unwrap();
            assert_eq!(window.start, expected_start, "stage {stage:?}");
            assert!(window.end >= window.start);
            expected_start = window.end;
        }
        assert_eq!(expected_start, 100);
    }

    #[test]
    fn stage_windows_match_fixed_weighting() {
        let expected = [
            (PipelineStage::Initializing, 0, 10),
            (PipelineStage::GeneratingImages, 10, 25),
            (PipelineStage::GeneratingVideos, 25, 50),
            (PipelineStage::Generating3d, 50, 70),
            (PipelineStage::Optimizing, 70, 90),
            (PipelineStage::Finalizing, 90, 100),
        ];
        for (stage, start, end) in expected {
            assert_eq!(stage.window(), Some(StageWindow { start, end }));
        }
    }

    #[test]
    fn complete_window_is_exactly_hundred() {
        assert_eq!(
            PipelineStage::Complete.window(),
            Some(StageWindow { start: 100, end: 100 })
        );
    }

    #[test]
    fn failed_has_no_window() {
        assert!(PipelineStage::Failed.window().is_none());
    }

    // -- state machine --

    #[test]
    fn stages_advance_in_order_to_complete() {
        let mut stage = PipelineStage::Initializing;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            visited.push(stage);
        }
        assert_eq!(stage, PipelineStage::Complete);
        assert_eq!(visited.len(), 7);
    }

    #[test]
    fn terminal_stages_have_no_next() {
        assert!(PipelineStage::Complete.next().is_none());
        assert!(PipelineStage::Failed.next().is_none());
        assert!(PipelineStage::Complete.is_terminal());
        assert!(PipelineStage::Failed.is_terminal());
        assert!(!PipelineStage::Optimizing.is_terminal());
    }

    // -- percent_at --

    #[test]
    fn percent_at_interpolates_within_window() {
        let window = PipelineStage::GeneratingImages.window().unwrap();
        assert_eq!(window.percent_at(0.0), 10);
        assert_eq!(window.percent_at(0.5), 18);
        assert_eq!(window.percent_at(1.0), 25);
    }

    #[test]
    fn percent_at_clamps_fraction() {
        let window = PipelineStage::Optimizing.window().unwrap();
        assert_eq!(window.percent_at(-2.0), 70);
        assert_eq!(window.percent_at(3.0), 90);
    }

    #[test]
    fn percent_at_handles_non_finite_fraction() {
        let window = PipelineStage::Finalizing.window().unwrap();
        assert_eq!(window.percent_at(f64::NAN), 100);
    }

    // -- serde --

    #[test]
    fn stage_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&PipelineStage::Generating3d).unwrap(),
            "\"generating_3d\""
        );
        assert_eq!(
            serde_json::to_string(&PipelineStage::GeneratingImages).unwrap(),
            "\"generating_images\""
        );
    }
}
