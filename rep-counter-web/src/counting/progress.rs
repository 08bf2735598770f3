//! Repetition progress toward the contracted position
//!
//! 0 at the up threshold, 1 at the down threshold, linear in between.

use super::rep_state::Thresholds;

/// How progress behaves outside the threshold band
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPolicy {
    /// Linear ramp, clamped to [0, 1]
    #[default]
    LinearClamped,
    /// Explicit saturation: ≤ down is exactly 1, ≥ up is exactly 0
    Saturating,
}

/// Fraction of the current rep completed, always within [0, 1].
/// A non-finite angle or an inverted band reports 0.
pub fn rep_progress(angle: f32, thresholds: Thresholds, policy: ProgressPolicy) -> f32 {
    if !angle.is_finite() || !thresholds.is_valid() {
        return 0.0;
    }

    let span = thresholds.up - thresholds.down;
    let progress = match policy {
        ProgressPolicy::LinearClamped => (thresholds.up - angle) / span,
        ProgressPolicy::Saturating => {
            if angle <= thresholds.down {
                1.0
            } else if angle >= thresholds.up {
                0.0
            } else {
                1.0 - (angle - thresholds.down) / span
            }
        }
    };

    progress.clamp(0.0, 1.0)
}
