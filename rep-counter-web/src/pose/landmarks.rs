//! Landmark storage layout and parsing
//!
//! MediaPipe Pose emits 33 landmarks per frame. JavaScript hands them over
//! as a flat Float32Array of `x, y, z, visibility` quadruples.

use nalgebra::Vector2;

use crate::error::CounterError;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

pub const LANDMARK_COUNT: usize = 33;
pub const VALUES_PER_LANDMARK: usize = 4;
pub const FLAT_POSE_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// Torso and limb connections drawn by the form overlay
pub const POSE_CONNECTIONS: [(usize, usize); 12] = [
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, RIGHT_HIP),
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
];

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single landmark in normalized image coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth, unused by the counter
    pub visibility: f32,  // 0-1 detection confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, z: 0.0, visibility }
    }

    /// 2D position in image space
    pub fn position(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    /// True when the model is confident enough about this point to use it.
    /// The floor is exclusive.
    pub fn is_reliable(&self, floor: f32) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.visibility > floor
    }
}

/// One frame of pose-estimation output
#[derive(Clone, Debug, PartialEq)]
pub struct PoseResult {
    pub landmarks: [Landmark; LANDMARK_COUNT],
    /// False when the model found no person in the frame
    pub present: bool,
}

impl PoseResult {
    /// Frame in which no person was detected
    pub fn absent() -> Self {
        Self {
            landmarks: [Landmark::default(); LANDMARK_COUNT],
            present: false,
        }
    }

    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks, present: true }
    }

    /// Parse the flat `x, y, z, visibility` layout sent by JavaScript.
    ///
    /// An empty slice means MediaPipe reported no pose. Any other length
    /// than `FLAT_POSE_LEN` is rejected.
    pub fn from_flat(data: &[f32]) -> Result<Self, CounterError> {
        if data.is_empty() {
            return Ok(Self::absent());
        }
        if data.len() != FLAT_POSE_LEN {
            return Err(CounterError::MalformedPose { len: data.len() });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, chunk) in landmarks.iter_mut().zip(data.chunks_exact(VALUES_PER_LANDMARK)) {
            *landmark = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: chunk[3],
            };
        }

        Ok(Self::new(landmarks))
    }

    /// Landmark by MediaPipe index, `None` when the pose is absent
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        if self.present {
            self.landmarks.get(index)
        } else {
            None
        }
    }
}

impl Default for PoseResult {
    fn default() -> Self {
        Self::absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_flat_is_absent() {
        let pose = PoseResult::from_flat(&[]).unwrap();
        assert!(!pose.present);
        assert!(pose.get(LEFT_ELBOW).is_none());
    }

    #[test]
    fn test_flat_layout() {
        let mut data = vec![0.0; FLAT_POSE_LEN];
        let base = LEFT_KNEE * VALUES_PER_LANDMARK;
        data[base] = 0.25;
        data[base + 1] = 0.75;
        data[base + 2] = -0.1;
        data[base + 3] = 0.9;

        let pose = PoseResult::from_flat(&data).unwrap();
        assert!(pose.present);
        let knee = pose.get(LEFT_KNEE).unwrap();
        assert_eq!(knee.x, 0.25);
        assert_eq!(knee.y, 0.75);
        assert_eq!(knee.z, -0.1);
        assert_eq!(knee.visibility, 0.9);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = PoseResult::from_flat(&[0.0; 99]).unwrap_err();
        assert!(matches!(err, CounterError::MalformedPose { len: 99 }));
    }

    #[test]
    fn test_reliability_floor_is_exclusive() {
        assert!(!Landmark::new(0.5, 0.5, 0.65).is_reliable(0.65));
        assert!(Landmark::new(0.5, 0.5, 0.66).is_reliable(0.65));
        assert!(!Landmark::new(f32::NAN, 0.5, 1.0).is_reliable(0.65));
    }
}
