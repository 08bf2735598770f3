//! Rep Counter Web - exercise repetition counting from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - The wasm_bindgen start hook
//!
//! MediaPipe Pose and the canvas overlay run in JavaScript. Rust turns the
//! per-frame landmarks into a debounced rep count, status and progress.

pub mod config;
pub mod counting;
pub mod error;
pub mod exercise;
pub mod logging;
pub mod pose;
pub mod session;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure_counter, get_progress, get_rep_count, get_status, overlay_keypoints,
    overlay_segments, reset_counter, select_exercise, session_summary_json, set_log_level,
    supported_exercises, update_pose, FrameReport,
};

pub use config::{CounterConfig, DebounceScope};
pub use error::CounterError;
pub use exercise::{ExerciseKind, ExerciseProfile};
pub use pose::{Landmark, PoseResult};
pub use session::{CounterSession, FrameOutcome, FrameOutput, SkipReason};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("rep counter ready");
}
