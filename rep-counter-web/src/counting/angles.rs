//! Joint angle calculation
//!
//! Measures the interior angle at a vertex joint from the two limb
//! segments that meet there, e.g. shoulder→elbow and elbow→wrist.

use nalgebra::Vector2;

use crate::pose::Landmark;

/// Segments shorter than this (normalized units) give no usable direction
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Interior angle at `b` in degrees, within [0, 180].
///
/// Each segment's heading is taken with `atan2`, the absolute difference of
/// the two headings is the angle, and anything past 180° is reflected back
/// as `360 - angle`.
///
/// Returns `None` when either segment is degenerate (coincident points) or
/// any coordinate is not finite, so no NaN ever reaches the smoother.
pub fn joint_angle(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> Option<f32> {
    let ba = a - b;
    let bc = c - b;

    if !ba.iter().chain(bc.iter()).all(|v| v.is_finite()) {
        return None;
    }
    if ba.norm() < MIN_SEGMENT_LENGTH || bc.norm() < MIN_SEGMENT_LENGTH {
        return None;
    }

    let radians = bc.y.atan2(bc.x) - ba.y.atan2(ba.x);
    let mut angle = radians.abs().to_degrees();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    Some(angle.clamp(0.0, 180.0))
}

/// `joint_angle` over three landmarks
pub fn landmark_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> Option<f32> {
    joint_angle(a.position(), b.position(), c.position())
}
