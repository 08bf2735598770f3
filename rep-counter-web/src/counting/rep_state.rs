//! Debounced two-state repetition machine
//!
//! The only place the rep count changes. A rep is credited when a full
//! UP → DOWN → UP cycle completes; entering DOWN never counts on its own.

use serde::Serialize;

use crate::config::{DebounceScope, DEFAULT_DEBOUNCE_MS};

use super::direction::Direction;

/// Display status of the current repetition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RepStatus {
    /// Extended / resting position
    #[default]
    Up,
    /// Contracted / flexed position
    Down,
}

impl RepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepStatus::Up => "UP",
            RepStatus::Down => "DOWN",
        }
    }
}

/// Angle thresholds in degrees. `down` must be below `up`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub down: f32,
    pub up: f32,
}

impl Thresholds {
    pub const fn new(down: f32, up: f32) -> Self {
        Self { down, up }
    }

    pub fn is_valid(&self) -> bool {
        self.down.is_finite() && self.up.is_finite() && self.down < self.up
    }
}

/// A state change fired by `RepStateMachine::update`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// UP → DOWN, count unchanged
    EnteredDown,
    /// DOWN → UP, count incremented by one
    CompletedRep,
}

pub struct RepStateMachine {
    rep_in_progress: bool,
    rep_count: u32,

    /// Minimum time between debounced transitions
    debounce_ms: f64,
    scope: DebounceScope,

    // Transition timestamps (monotonic ms)
    last_transition_ms: f64,
    last_down_ms: f64,
    last_up_ms: f64,
}

impl RepStateMachine {
    pub fn new(debounce_ms: f64, scope: DebounceScope, now_ms: f64) -> Self {
        Self {
            rep_in_progress: false,
            rep_count: 0,
            debounce_ms,
            scope,
            last_transition_ms: now_ms,
            last_down_ms: now_ms,
            last_up_ms: now_ms,
        }
    }

    /// Evaluate one smoothed sample.
    ///
    /// UP → DOWN needs: angle ≤ down threshold, moving down, not already in
    /// a rep, debounce elapsed. DOWN → UP needs: angle ≥ up threshold,
    /// moving up, rep in progress, debounce elapsed.
    pub fn update(
        &mut self,
        angle: f32,
        direction: Direction,
        thresholds: Thresholds,
        now_ms: f64,
    ) -> Option<Transition> {
        if !angle.is_finite() {
            return None;
        }

        if !self.rep_in_progress
            && angle <= thresholds.down
            && direction == Direction::Down
            && self.debounced(Transition::EnteredDown, now_ms)
        {
            self.rep_in_progress = true;
            self.last_down_ms = now_ms;
            self.last_transition_ms = now_ms;
            log::debug!("rep entered DOWN at {:.1}°", angle);
            return Some(Transition::EnteredDown);
        }

        if self.rep_in_progress
            && angle >= thresholds.up
            && direction == Direction::Up
            && self.debounced(Transition::CompletedRep, now_ms)
        {
            self.rep_in_progress = false;
            self.rep_count += 1;
            self.last_up_ms = now_ms;
            self.last_transition_ms = now_ms;
            log::info!("rep {} completed at {:.1}°", self.rep_count, angle);
            return Some(Transition::CompletedRep);
        }

        None
    }

    /// Time since the transition this one is debounced against. A clock
    /// that went backwards counts as no time elapsed.
    fn debounced(&self, transition: Transition, now_ms: f64) -> bool {
        let since = match (self.scope, transition) {
            (DebounceScope::AnyTransition, _) => self.last_transition_ms,
            (DebounceScope::SameTransition, Transition::EnteredDown) => self.last_down_ms,
            (DebounceScope::SameTransition, Transition::CompletedRep) => self.last_up_ms,
        };
        (now_ms - since).max(0.0) >= self.debounce_ms
    }

    pub fn status(&self) -> RepStatus {
        if self.rep_in_progress {
            RepStatus::Down
        } else {
            RepStatus::Up
        }
    }

    pub fn rep_in_progress(&self) -> bool {
        self.rep_in_progress
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Back to UP with a zero count; debounce timers restart at `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.rep_in_progress = false;
        self.rep_count = 0;
        self.last_transition_ms = now_ms;
        self.last_down_ms = now_ms;
        self.last_up_ms = now_ms;
    }
}

impl Default for RepStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS, DebounceScope::default(), 0.0)
    }
}
