//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod counter;
mod report;

pub use landmarks::{
    overlay_segments,
    overlay_keypoints,
};

pub use counter::{
    update_pose,
    select_exercise,
    reset_counter,
    configure_counter,
    set_log_level,
    get_rep_count,
    get_status,
    get_progress,
    supported_exercises,
    session_summary_json,
};

pub use report::FrameReport;
