//! Errors surfaced to the UI shell
//!
//! Per-frame problems (no person, low visibility, degenerate geometry) are
//! not errors: the frame is skipped and reported through `FrameOutcome`.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum CounterError {
    /// Exercise id not present in the profile table
    #[error("unknown exercise '{0}'")]
    UnknownExercise(String),

    /// Configuration value out of range
    #[error("invalid counter config: {0}")]
    InvalidConfig(String),

    /// Flat landmark array with the wrong number of values
    #[error("invalid landmark data length: {len} (expected {})", crate::pose::FLAT_POSE_LEN)]
    MalformedPose { len: usize },

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CounterError> for JsValue {
    fn from(err: CounterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
