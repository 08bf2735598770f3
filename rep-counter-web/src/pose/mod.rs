//! Pose module - landmark types coming from the pose-estimation model
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod overlay;

pub use landmarks::{
    Landmark, PoseResult,
    // Layout
    LANDMARK_COUNT, VALUES_PER_LANDMARK, FLAT_POSE_LEN,
    // Indices
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    POSE_CONNECTIONS,
};
pub use overlay::{visible_segments, visible_keypoints};
