//! Per-frame output handed to the renderer

use crate::counting::{RepStatus, Transition};
use crate::pose::Landmark;

/// Why a frame did not contribute an angle sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The pose model found nobody
    NoPose,
    /// A required joint is at or below the visibility floor
    LowVisibility,
    /// Coincident joints, the angle is undefined
    DegenerateGeometry,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoPose => "no_pose",
            SkipReason::LowVisibility => "low_visibility",
            SkipReason::DegenerateGeometry => "degenerate_geometry",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The frame's angle went through the counter
    Counted,
    /// Prior state held
    Skipped(SkipReason),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub rep_count: u32,
    pub status: RepStatus,
    /// Progress toward the contracted position, within [0, 1]
    pub progress: f32,
    /// Smoothed tracked angle; `None` until the first usable frame
    pub smoothed_angle: Option<f32>,
    /// This frame's angle before smoothing, if it was measurable
    pub raw_angle: Option<f32>,
    /// Where the renderer draws the angle label
    pub label_joint: Option<Landmark>,
    pub outcome: FrameOutcome,
    /// State change fired by this frame, if any
    pub transition: Option<Transition>,
}

impl FrameOutput {
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, FrameOutcome::Skipped(_))
    }
}
