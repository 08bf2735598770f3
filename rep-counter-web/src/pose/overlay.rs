//! Form overlay geometry
//!
//! Flattens the visible part of the skeleton for the JavaScript canvas
//! renderer. Only landmarks above the visibility floor are emitted.

use super::landmarks::{PoseResult, POSE_CONNECTIONS};

/// Visible skeleton segments as `[x1, y1, x2, y2, ...]` in normalized coords
pub fn visible_segments(pose: &PoseResult, floor: f32) -> Vec<f32> {
    if !pose.present {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(POSE_CONNECTIONS.len() * 4);
    for &(start, end) in POSE_CONNECTIONS.iter() {
        let a = pose.landmarks[start];
        let b = pose.landmarks[end];
        if a.is_reliable(floor) && b.is_reliable(floor) {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
    }
    out
}

/// Visible keypoints as `[x, y, ...]` in normalized coords
pub fn visible_keypoints(pose: &PoseResult, floor: f32) -> Vec<f32> {
    if !pose.present {
        return Vec::new();
    }

    pose.landmarks
        .iter()
        .filter(|lm| lm.is_reliable(floor))
        .flat_map(|lm| [lm.x, lm.y])
        .collect()
}
