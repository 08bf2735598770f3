//! Visibility gate - keeps unreliable landmarks out of the angle signal
//!
//! When any joint the exercise needs is at or below the visibility floor the
//! frame is skipped and the session holds its previous state. The gate also
//! remembers whether the last frame was skipped so "tracking lost" is
//! reported once per run instead of every frame.

use crate::config::DEFAULT_VISIBILITY_FLOOR;
use crate::pose::Landmark;

pub struct VisibilityGate {
    /// Minimum visibility (exclusive) to accept a landmark
    floor: f32,
    /// Frames skipped in a row
    consecutive_skips: u32,
}

impl VisibilityGate {
    pub fn new(floor: f32) -> Self {
        Self {
            floor,
            consecutive_skips: 0,
        }
    }

    pub fn set_floor(&mut self, floor: f32) {
        self.floor = floor;
    }

    /// True when every landmark clears the floor
    pub fn passes<'a>(&self, joints: impl IntoIterator<Item = &'a Landmark>) -> bool {
        joints.into_iter().all(|lm| lm.is_reliable(self.floor))
    }

    /// Record a used frame. Returns true if this ends a run of skipped frames.
    pub fn accept(&mut self) -> bool {
        let regained = self.consecutive_skips > 0;
        self.consecutive_skips = 0;
        regained
    }

    /// Record a skipped frame. Returns true if this starts a run.
    pub fn reject(&mut self) -> bool {
        self.consecutive_skips = self.consecutive_skips.saturating_add(1);
        self.consecutive_skips == 1
    }

    pub fn consecutive_skips(&self) -> u32 {
        self.consecutive_skips
    }

    pub fn reset(&mut self) {
        self.consecutive_skips = 0;
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_FLOOR)
    }
}
