//! Landmark storage for the overlay
//!
//! Keeps the most recent pose so the renderer can pull the visible
//! skeleton after each `update_pose` call.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::pose::{visible_keypoints, visible_segments, PoseResult};

/// Internal storage for the current frame's pose
struct LandmarkStore {
    pose: PoseResult,
    /// Visibility floor the overlay uses, kept in step with the counter config
    floor: f32,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            pose: PoseResult::absent(),
            floor: crate::config::DEFAULT_VISIBILITY_FLOOR,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Visible skeleton segments of the last frame, `[x1, y1, x2, y2, ...]`
#[wasm_bindgen]
pub fn overlay_segments() -> Vec<f32> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        visible_segments(&store.pose, store.floor)
    })
}

/// Visible keypoints of the last frame, `[x, y, ...]`
#[wasm_bindgen]
pub fn overlay_keypoints() -> Vec<f32> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        visible_keypoints(&store.pose, store.floor)
    })
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Replace the stored pose (called from update_pose)
pub fn store_pose(pose: PoseResult, floor: f32) {
    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.pose = pose;
        store.floor = floor;
    });
}
