//! Counter tuning parameters
//!
//! Defaults match the behaviour the UI shipped with. The page can override
//! any subset of fields by passing JSON to `configure_counter`.

use serde::{Deserialize, Serialize};

use crate::error::CounterError;

/// Samples in the moving-average window
pub const DEFAULT_SMOOTHING_WINDOW: usize = 10;

/// Smoothed-angle change (degrees) needed to flip movement direction
pub const DEFAULT_DIRECTION_HYSTERESIS: f32 = 1.0;

/// Minimum time between debounced transitions
pub const DEFAULT_DEBOUNCE_MS: f64 = 500.0;

/// Landmarks at or below this visibility are ignored
pub const DEFAULT_VISIBILITY_FLOOR: f32 = 0.65;

/// Which earlier transition a new transition is debounced against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebounceScope {
    /// Entering DOWN waits on the last DOWN entry, completing UP on the last UP
    SameTransition,
    /// One shared timestamp for both transitions
    #[default]
    AnyTransition,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub smoothing_window: usize,
    pub direction_hysteresis_deg: f32,
    pub debounce_ms: f64,
    pub visibility_floor: f32,
    pub debounce_scope: DebounceScope,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            direction_hysteresis_deg: DEFAULT_DIRECTION_HYSTERESIS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            visibility_floor: DEFAULT_VISIBILITY_FLOOR,
            debounce_scope: DebounceScope::default(),
        }
    }
}

impl CounterConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CounterError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CounterError> {
        if self.smoothing_window == 0 {
            return Err(CounterError::InvalidConfig(
                "smoothing_window must be at least 1".into(),
            ));
        }
        if self.direction_hysteresis_deg.is_nan() || self.direction_hysteresis_deg < 0.0 {
            return Err(CounterError::InvalidConfig(format!(
                "direction_hysteresis_deg must be >= 0, got {}",
                self.direction_hysteresis_deg
            )));
        }
        if !self.debounce_ms.is_finite() || self.debounce_ms < 0.0 {
            return Err(CounterError::InvalidConfig(format!(
                "debounce_ms must be a finite value >= 0, got {}",
                self.debounce_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.visibility_floor) {
            return Err(CounterError::InvalidConfig(format!(
                "visibility_floor must be within [0, 1], got {}",
                self.visibility_floor
            )));
        }
        Ok(())
    }
}
