//! Movement direction with a hysteresis band
//!
//! Compares consecutive smoothed angles. Changes inside the band hold the
//! previous direction so residual noise cannot flicker it.

use crate::config::DEFAULT_DIRECTION_HYSTERESIS;

/// Which way the tracked joint angle is moving
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// No movement seen since the last reset
    #[default]
    None,
    /// Angle increasing (extending)
    Up,
    /// Angle decreasing (flexing)
    Down,
}

pub struct DirectionTracker {
    direction: Direction,
    /// Smoothed angle from the previous frame
    last_angle: f32,
    hysteresis: f32,
}

impl DirectionTracker {
    pub fn new(hysteresis: f32) -> Self {
        Self {
            direction: Direction::None,
            last_angle: 0.0,
            hysteresis,
        }
    }

    /// Feed the newest smoothed angle and return the (possibly held) direction
    pub fn update(&mut self, smoothed: f32) -> Direction {
        if smoothed < self.last_angle - self.hysteresis {
            self.direction = Direction::Down;
        } else if smoothed > self.last_angle + self.hysteresis {
            self.direction = Direction::Up;
        }
        self.last_angle = smoothed;
        self.direction
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_angle(&self) -> f32 {
        self.last_angle
    }

    /// Forget the direction. The previous angle is kept so the first frame
    /// after a reset is compared against the last thing actually seen.
    pub fn reset(&mut self) {
        self.direction = Direction::None;
    }
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTION_HYSTERESIS)
    }
}
