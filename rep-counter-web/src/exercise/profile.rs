//! Exercise profiles
//!
//! Each exercise is one row in `PROFILES`: the joint triples whose angle is
//! tracked, the down/up thresholds and the progress policy. Adding an
//! exercise means adding a row here.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::counting::{landmark_angle, ProgressPolicy, Thresholds};
use crate::error::CounterError;
use crate::pose::{
    PoseResult, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    PushUps,
    Squats,
    SitUps,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::PushUps, ExerciseKind::Squats, ExerciseKind::SitUps];

    /// Id used by the UI selector
    pub fn id(&self) -> &'static str {
        match self {
            ExerciseKind::PushUps => "pushups",
            ExerciseKind::Squats => "squats",
            ExerciseKind::SitUps => "situps",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExerciseKind {
    type Err = CounterError;

    /// Case-insensitive; "push-ups", "Push_Ups" and "pushups" are the same id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        ExerciseKind::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized)
            .ok_or_else(|| CounterError::UnknownExercise(s.to_string()))
    }
}

/// Landmark indices `(a, b, c)`; the angle is measured at `b`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JointTriple {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl JointTriple {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExerciseProfile {
    pub kind: ExerciseKind,
    /// One triple for single-side exercises, left and right for bilateral
    /// ones. The measured angle is the mean across triples.
    pub joints: &'static [JointTriple],
    pub thresholds: Thresholds,
    pub progress_policy: ProgressPolicy,
    /// Joint the angle label is drawn next to
    pub label_joint: usize,
}

pub const PROFILES: [ExerciseProfile; 3] = [
    ExerciseProfile {
        kind: ExerciseKind::PushUps,
        joints: &[
            JointTriple::new(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            JointTriple::new(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        ],
        thresholds: Thresholds::new(85.0, 160.0),
        progress_policy: ProgressPolicy::LinearClamped,
        label_joint: LEFT_ELBOW,
    },
    ExerciseProfile {
        kind: ExerciseKind::Squats,
        joints: &[
            JointTriple::new(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
            JointTriple::new(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
        ],
        thresholds: Thresholds::new(90.0, 165.0),
        progress_policy: ProgressPolicy::Saturating,
        label_joint: LEFT_KNEE,
    },
    ExerciseProfile {
        kind: ExerciseKind::SitUps,
        joints: &[JointTriple::new(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE)],
        thresholds: Thresholds::new(75.0, 130.0),
        progress_policy: ProgressPolicy::LinearClamped,
        label_joint: LEFT_HIP,
    },
];

impl ExerciseProfile {
    pub fn for_kind(kind: ExerciseKind) -> Self {
        PROFILES
            .into_iter()
            .find(|profile| profile.kind == kind)
            .unwrap_or(PROFILES[0])
    }

    /// Look up a profile by UI id
    pub fn by_id(id: &str) -> Result<Self, CounterError> {
        id.parse().map(Self::for_kind)
    }

    /// Every landmark index the angle depends on
    pub fn required_joints(&self) -> impl Iterator<Item = usize> + '_ {
        self.joints.iter().flat_map(|t| [t.a, t.b, t.c])
    }

    /// Raw tracked angle for one frame: the mean of every triple's angle.
    /// `None` if the pose is absent or any triple is degenerate.
    pub fn measure(&self, pose: &PoseResult) -> Option<f32> {
        if self.joints.is_empty() {
            return None;
        }

        let mut sum = 0.0;
        for triple in self.joints {
            let a = pose.get(triple.a)?;
            let b = pose.get(triple.b)?;
            let c = pose.get(triple.c)?;
            sum += landmark_angle(a, b, c)?;
        }

        Some(sum / self.joints.len() as f32)
    }
}

impl Default for ExerciseProfile {
    fn default() -> Self {
        Self::for_kind(ExerciseKind::PushUps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Landmark, LANDMARK_COUNT};

    /// Place `a` straight above `b` and `c` at `degrees` from it
    fn bend(pose: &mut PoseResult, triple: JointTriple, vertex: (f32, f32), degrees: f32) {
        let (bx, by) = vertex;
        let r = degrees.to_radians();
        pose.landmarks[triple.a] = Landmark::new(bx, by - 0.2, 1.0);
        pose.landmarks[triple.b] = Landmark::new(bx, by, 1.0);
        pose.landmarks[triple.c] = Landmark::new(bx + 0.2 * r.sin(), by - 0.2 * r.cos(), 1.0);
    }

    fn empty_pose() -> PoseResult {
        PoseResult::new([Landmark::default(); LANDMARK_COUNT])
    }

    #[test]
    fn test_table_thresholds_ordered() {
        for profile in PROFILES {
            assert!(profile.thresholds.is_valid(), "{}", profile.kind);
            assert!(!profile.joints.is_empty());
        }
    }

    #[test]
    fn test_every_kind_has_a_row() {
        for kind in ExerciseKind::ALL {
            assert_eq!(ExerciseProfile::for_kind(kind).kind, kind);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(ExerciseProfile::by_id("squats").unwrap().kind, ExerciseKind::Squats);
        assert_eq!(ExerciseProfile::by_id("Push-Ups").unwrap().kind, ExerciseKind::PushUps);
        assert_eq!(ExerciseProfile::by_id("sit_ups").unwrap().kind, ExerciseKind::SitUps);
        assert!(matches!(
            ExerciseProfile::by_id("burpees"),
            Err(CounterError::UnknownExercise(id)) if id == "burpees"
        ));
    }

    #[test]
    fn test_thresholds_match_table() {
        let pushups = ExerciseProfile::for_kind(ExerciseKind::PushUps);
        assert_eq!(pushups.thresholds, Thresholds::new(85.0, 160.0));
        let squats = ExerciseProfile::for_kind(ExerciseKind::Squats);
        assert_eq!(squats.thresholds, Thresholds::new(90.0, 165.0));
        let situps = ExerciseProfile::for_kind(ExerciseKind::SitUps);
        assert_eq!(situps.thresholds, Thresholds::new(75.0, 130.0));
    }

    #[test]
    fn test_bilateral_average() {
        let profile = ExerciseProfile::for_kind(ExerciseKind::Squats);
        let mut pose = empty_pose();
        bend(&mut pose, profile.joints[0], (0.4, 0.5), 100.0);
        bend(&mut pose, profile.joints[1], (0.6, 0.5), 120.0);
        let angle = profile.measure(&pose).unwrap();
        assert!((angle - 110.0).abs() < 0.01);
    }

    #[test]
    fn test_single_side() {
        let profile = ExerciseProfile::for_kind(ExerciseKind::SitUps);
        let mut pose = empty_pose();
        bend(&mut pose, profile.joints[0], (0.5, 0.5), 75.0);
        assert!((profile.measure(&pose).unwrap() - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_side_fails_measurement() {
        let profile = ExerciseProfile::for_kind(ExerciseKind::PushUps);
        let mut pose = empty_pose();
        bend(&mut pose, profile.joints[0], (0.4, 0.5), 90.0);
        // Right side left at the origin: all three points coincide
        assert_eq!(profile.measure(&pose), None);
        assert_eq!(profile.measure(&PoseResult::absent()), None);
    }

    #[test]
    fn test_required_joints() {
        let joints: Vec<usize> = ExerciseProfile::for_kind(ExerciseKind::PushUps)
            .required_joints()
            .collect();
        assert_eq!(
            joints,
            vec![LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST]
        );
    }
}
