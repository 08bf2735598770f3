//! Counter session - runs one frame at a time through the counting pipeline
//!
//! landmarks → angle → smoother → {direction, state machine, progress}
//!
//! A session belongs to one tracked person. Frames must arrive in order;
//! `now_ms` must come from a monotonic clock.

use crate::config::CounterConfig;
use crate::counting::{
    rep_progress, DirectionTracker, RepStateMachine, RepStatus, Smoother, VisibilityGate,
};
use crate::error::CounterError;
use crate::exercise::ExerciseProfile;
use crate::pose::{Landmark, PoseResult};

use super::frame::{FrameOutcome, FrameOutput, SkipReason};
use super::summary::SessionSummary;

pub struct CounterSession {
    profile: ExerciseProfile,
    config: CounterConfig,

    // Pipeline stages
    gate: VisibilityGate,
    smoother: Smoother,
    direction: DirectionTracker,
    machine: RepStateMachine,

    // Last published values, held across skipped frames
    progress: f32,
    smoothed_angle: Option<f32>,

    frames_processed: u64,
    frames_skipped: u64,
}

impl CounterSession {
    pub fn new(profile: ExerciseProfile, config: CounterConfig, now_ms: f64) -> Self {
        Self {
            profile,
            gate: VisibilityGate::new(config.visibility_floor),
            smoother: Smoother::new(config.smoothing_window),
            direction: DirectionTracker::new(config.direction_hysteresis_deg),
            machine: RepStateMachine::new(config.debounce_ms, config.debounce_scope, now_ms),
            config,
            progress: 0.0,
            smoothed_angle: None,
            frames_processed: 0,
            frames_skipped: 0,
        }
    }

    /// Process one frame to completion.
    ///
    /// Frames without a pose, with a required joint below the visibility
    /// floor, or with coincident joints are skipped: nothing enters the
    /// smoother and the previous count, status and progress are reported.
    pub fn process_frame(&mut self, pose: &PoseResult, now_ms: f64) -> FrameOutput {
        let label_joint = pose.get(self.profile.label_joint).copied();

        if !pose.present {
            return self.skip(SkipReason::NoPose, label_joint);
        }

        let joints = self.profile.required_joints().map(|idx| &pose.landmarks[idx]);
        if !self.gate.passes(joints) {
            return self.skip(SkipReason::LowVisibility, label_joint);
        }

        let raw_angle = match self.profile.measure(pose) {
            Some(angle) => angle,
            None => return self.skip(SkipReason::DegenerateGeometry, label_joint),
        };

        if self.gate.accept() {
            log::info!("tracking regained for {}", self.profile.kind);
        }

        let smoothed = self.smoother.push(raw_angle);
        let direction = self.direction.update(smoothed);
        let transition = self
            .machine
            .update(smoothed, direction, self.profile.thresholds, now_ms);
        self.progress = rep_progress(smoothed, self.profile.thresholds, self.profile.progress_policy);
        self.smoothed_angle = Some(smoothed);
        self.frames_processed += 1;

        FrameOutput {
            rep_count: self.machine.rep_count(),
            status: self.machine.status(),
            progress: self.progress,
            smoothed_angle: self.smoothed_angle,
            raw_angle: Some(raw_angle),
            label_joint,
            outcome: FrameOutcome::Counted,
            transition,
        }
    }

    fn skip(&mut self, reason: SkipReason, label_joint: Option<Landmark>) -> FrameOutput {
        if self.gate.reject() {
            log::info!("tracking lost for {}: {}", self.profile.kind, reason.as_str());
        }
        self.frames_skipped += 1;

        FrameOutput {
            rep_count: self.machine.rep_count(),
            status: self.machine.status(),
            progress: self.progress,
            smoothed_angle: self.smoothed_angle,
            raw_angle: None,
            label_joint,
            outcome: FrameOutcome::Skipped(reason),
            transition: None,
        }
    }

    /// Switch exercise by UI id. An unknown id leaves the session untouched.
    pub fn select_exercise(&mut self, id: &str, now_ms: f64) -> Result<(), CounterError> {
        let profile = ExerciseProfile::by_id(id).map_err(|err| {
            log::warn!("{}", err);
            err
        })?;
        self.set_profile(profile, now_ms);
        Ok(())
    }

    /// Replace the profile wholesale and clear all counting state
    pub fn set_profile(&mut self, profile: ExerciseProfile, now_ms: f64) {
        log::info!("exercise switched {} -> {}", self.profile.kind, profile.kind);
        self.profile = profile;
        self.clear(now_ms);
    }

    /// Manual reset: count to zero, status UP, fresh smoothing window.
    /// The profile is unchanged.
    pub fn reset(&mut self, now_ms: f64) {
        log::info!("counter reset for {} at {} reps", self.profile.kind, self.machine.rep_count());
        self.clear(now_ms);
    }

    /// Apply new tuning. Rejected configs leave the session untouched;
    /// accepted ones reset the session since the window may have changed.
    pub fn apply_config(&mut self, config: CounterConfig, now_ms: f64) -> Result<(), CounterError> {
        config.validate()?;
        self.smoother = Smoother::new(config.smoothing_window);
        self.direction = DirectionTracker::new(config.direction_hysteresis_deg);
        self.machine = RepStateMachine::new(config.debounce_ms, config.debounce_scope, now_ms);
        self.gate.set_floor(config.visibility_floor);
        self.config = config;
        self.clear(now_ms);
        log::debug!("counter config applied: {:?}", self.config);
        Ok(())
    }

    fn clear(&mut self, now_ms: f64) {
        self.smoother.clear();
        self.direction.reset();
        self.machine.reset(now_ms);
        self.gate.reset();
        self.progress = 0.0;
        self.smoothed_angle = None;
        self.frames_processed = 0;
        self.frames_skipped = 0;
    }

    pub fn rep_count(&self) -> u32 {
        self.machine.rep_count()
    }

    pub fn status(&self) -> RepStatus {
        self.machine.status()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn smoothed_angle(&self) -> Option<f32> {
        self.smoothed_angle
    }

    pub fn buffered_samples(&self) -> usize {
        self.smoother.len()
    }

    pub fn profile(&self) -> &ExerciseProfile {
        &self.profile
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            exercise: self.profile.kind,
            rep_count: self.machine.rep_count(),
            status: self.machine.status(),
            frames_processed: self.frames_processed,
            frames_skipped: self.frames_skipped,
        }
    }
}

impl Default for CounterSession {
    fn default() -> Self {
        Self::new(ExerciseProfile::default(), CounterConfig::default(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::Transition;
    use crate::exercise::ExerciseKind;
    use crate::pose::{Landmark, LANDMARK_COUNT, LEFT_WRIST};

    /// Pose with every required joint of `profile` bent to `degrees`
    fn pose_at(profile: &ExerciseProfile, degrees: f32, visibility: f32) -> PoseResult {
        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        let r = degrees.to_radians();
        for (i, triple) in profile.joints.iter().enumerate() {
            let bx = 0.3 + 0.4 * i as f32;
            let by = 0.5;
            landmarks[triple.a] = Landmark::new(bx, by - 0.2, visibility);
            landmarks[triple.b] = Landmark::new(bx, by, visibility);
            landmarks[triple.c] = Landmark::new(bx + 0.2 * r.sin(), by - 0.2 * r.cos(), visibility);
        }
        PoseResult::new(landmarks)
    }

    #[test]
    fn test_skipped_frames_hold_state() {
        let mut session = CounterSession::default();
        let profile = *session.profile();
        session.process_frame(&pose_at(&profile, 150.0, 1.0), 100.0);
        let before = session.smoothed_angle();

        let out = session.process_frame(&PoseResult::absent(), 200.0);
        assert_eq!(out.outcome, FrameOutcome::Skipped(SkipReason::NoPose));
        assert_eq!(out.smoothed_angle, before);
        assert_eq!(out.raw_angle, None);

        let out = session.process_frame(&pose_at(&profile, 90.0, 0.5), 300.0);
        assert_eq!(out.outcome, FrameOutcome::Skipped(SkipReason::LowVisibility));
        assert_eq!(session.buffered_samples(), 1);
        assert_eq!(session.summary().frames_skipped, 2);
    }

    #[test]
    fn test_one_weak_joint_skips_frame() {
        let mut session = CounterSession::default();
        let profile = *session.profile();
        let mut pose = pose_at(&profile, 120.0, 0.9);
        pose.landmarks[LEFT_WRIST].visibility = 0.65;
        let out = session.process_frame(&pose, 100.0);
        assert!(out.is_skipped());
        assert_eq!(session.buffered_samples(), 0);
    }

    #[test]
    fn test_degenerate_geometry_skips() {
        let mut session = CounterSession::default();
        let profile = *session.profile();
        let mut pose = pose_at(&profile, 120.0, 0.9);
        let elbow = pose.landmarks[profile.joints[0].b];
        pose.landmarks[profile.joints[0].a] = elbow;
        let out = session.process_frame(&pose, 100.0);
        assert_eq!(out.outcome, FrameOutcome::Skipped(SkipReason::DegenerateGeometry));
        assert_eq!(session.buffered_samples(), 0);
    }

    #[test]
    fn test_counted_frame_reports_label_and_angles() {
        let mut session = CounterSession::default();
        let profile = *session.profile();
        let pose = pose_at(&profile, 120.0, 1.0);
        let out = session.process_frame(&pose, 100.0);
        assert_eq!(out.outcome, FrameOutcome::Counted);
        assert!((out.raw_angle.unwrap() - 120.0).abs() < 0.01);
        assert!((out.smoothed_angle.unwrap() - 120.0).abs() < 0.01);
        assert_eq!(out.label_joint, Some(pose.landmarks[profile.label_joint]));
        // (160 - 120) / 75
        assert!((out.progress - 40.0 / 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_exercise_is_rejected_without_reset() {
        let mut session = CounterSession::default();
        let profile = *session.profile();
        session.process_frame(&pose_at(&profile, 150.0, 1.0), 100.0);

        let err = session.select_exercise("jumping-jacks", 200.0).unwrap_err();
        assert!(matches!(err, CounterError::UnknownExercise(_)));
        assert_eq!(session.profile().kind, ExerciseKind::PushUps);
        assert_eq!(session.buffered_samples(), 1);
    }

    #[test]
    fn test_switch_clears_everything() {
        let mut session = CounterSession::default();
        let profile = *session.profile();
        let mut t = 0.0;
        for angle in [170.0, 140.0, 110.0, 80.0, 80.0, 80.0, 80.0, 80.0, 80.0, 80.0, 80.0, 80.0, 80.0] {
            t += 100.0;
            session.process_frame(&pose_at(&profile, angle, 1.0), t);
        }
        assert_eq!(session.status(), RepStatus::Down);

        session.select_exercise("squats", t).unwrap();
        assert_eq!(session.profile().kind, ExerciseKind::Squats);
        assert_eq!(session.rep_count(), 0);
        assert_eq!(session.status(), RepStatus::Up);
        assert_eq!(session.buffered_samples(), 0);
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.smoothed_angle(), None);

        let squat = *session.profile();
        let out = session.process_frame(&pose_at(&squat, 150.0, 1.0), t + 100.0);
        assert!((out.smoothed_angle.unwrap() - 150.0).abs() < 0.01);
    }

    #[test]
    fn test_reset_keeps_profile() {
        let mut session = CounterSession::new(
            ExerciseProfile::for_kind(ExerciseKind::SitUps),
            CounterConfig::default(),
            0.0,
        );
        let profile = *session.profile();
        session.process_frame(&pose_at(&profile, 100.0, 1.0), 100.0);
        session.reset(200.0);
        assert_eq!(session.profile().kind, ExerciseKind::SitUps);
        assert_eq!(session.buffered_samples(), 0);
        assert_eq!(session.summary().frames_processed, 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut session = CounterSession::default();
        let bad = CounterConfig { smoothing_window: 0, ..CounterConfig::default() };
        assert!(session.apply_config(bad, 0.0).is_err());
        assert_eq!(session.config().smoothing_window, 10);
    }

    #[test]
    fn test_full_rep_through_session() {
        let config = CounterConfig { smoothing_window: 1, ..CounterConfig::default() };
        let mut session = CounterSession::new(ExerciseProfile::default(), config, 0.0);
        let profile = *session.profile();

        let mut transitions = Vec::new();
        let mut t = 0.0;
        for angle in [170.0, 130.0, 84.0, 80.0, 80.0, 80.0, 80.0, 80.0, 120.0, 165.0] {
            t += 100.0;
            if let Some(tr) = session.process_frame(&pose_at(&profile, angle, 1.0), t).transition {
                transitions.push(tr);
            }
        }
        assert_eq!(transitions, vec![Transition::EnteredDown, Transition::CompletedRep]);
        assert_eq!(session.rep_count(), 1);
    }
}
