//! Counter session entry points
//!
//! One session per page, held in thread-local storage. The page calls
//! `update_pose` from MediaPipe's `onResults` callback and reads the
//! returned `FrameReport`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::CounterConfig;
use crate::error::CounterError;
use crate::exercise::{ExerciseKind, ExerciseProfile};
use crate::logging;
use crate::pose::PoseResult;
use crate::session::CounterSession;

use super::landmarks::store_pose;
use super::report::FrameReport;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<CounterSession>> = RefCell::new(None);
}

/// Monotonic milliseconds from `performance.now()`.
///
/// Falls back to 0 where there is no window (workers); callers there must
/// pass their own timestamps or debounce never elapses.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

/// Run `f` against the page session, creating a push-up session on first use
fn with_session<R>(now: f64, f: impl FnOnce(&mut CounterSession) -> R) -> R {
    SESSION.with(|session_cell| {
        let mut slot = session_cell.borrow_mut();
        let session = slot.get_or_insert_with(|| {
            CounterSession::new(ExerciseProfile::default(), CounterConfig::default(), now)
        });
        f(session)
    })
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Feed one frame of landmarks: a flat Float32Array of 132 values
/// (33 landmarks × x, y, z, visibility), or an empty array when MediaPipe
/// found no pose. `timestamp_ms` must be monotonic; when omitted
/// `performance.now()` is used.
#[wasm_bindgen]
pub fn update_pose(data: &[f32], timestamp_ms: Option<f64>) -> FrameReport {
    let now = timestamp_ms.unwrap_or_else(now_ms);

    let pose = match PoseResult::from_flat(data) {
        Ok(pose) => pose,
        Err(err) => {
            log::warn!("{}", err);
            PoseResult::absent()
        }
    };

    with_session(now, |session| {
        let output = session.process_frame(&pose, now);
        store_pose(pose, session.config().visibility_floor);
        output.into()
    })
}

/// Switch exercise ("pushups", "squats", "situps"). Resets the counter.
/// Unknown ids are rejected and leave the session as it was.
#[wasm_bindgen]
pub fn select_exercise(id: &str) -> Result<(), JsValue> {
    let now = now_ms();
    with_session(now, |session| session.select_exercise(id, now))?;
    Ok(())
}

/// Zero the counter without changing exercise
#[wasm_bindgen]
pub fn reset_counter() {
    let now = now_ms();
    with_session(now, |session| session.reset(now));
}

/// Override tuning with a JSON object, e.g. `{"debounce_ms": 400}`.
/// Missing fields take their defaults. Resets the counter.
#[wasm_bindgen]
pub fn configure_counter(json: &str) -> Result<(), JsValue> {
    let now = now_ms();
    let config = CounterConfig::from_json(json).map_err(|err| {
        log::warn!("{}", err);
        err
    })?;
    with_session(now, |session| session.apply_config(config, now))?;
    Ok(())
}

/// Change the console log level ("off", "error", "warn", "info", "debug")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| CounterError::InvalidConfig(format!("unknown log level '{}'", level)))?;
    logging::init(filter);
    Ok(())
}

#[wasm_bindgen]
pub fn get_rep_count() -> u32 {
    with_session(now_ms(), |session| session.rep_count())
}

#[wasm_bindgen]
pub fn get_status() -> String {
    with_session(now_ms(), |session| session.status().as_str().to_string())
}

#[wasm_bindgen]
pub fn get_progress() -> f32 {
    with_session(now_ms(), |session| session.progress())
}

/// Ids accepted by `select_exercise`
#[wasm_bindgen]
pub fn supported_exercises() -> Vec<String> {
    ExerciseKind::ALL.iter().map(|kind| kind.id().to_string()).collect()
}

/// Current session as JSON for the storage endpoint
#[wasm_bindgen]
pub fn session_summary_json() -> Result<String, JsValue> {
    let json = with_session(now_ms(), |session| session.summary().to_json())?;
    Ok(json)
}
