//! Frame report exposed to JavaScript

use wasm_bindgen::prelude::*;

use crate::session::{FrameOutcome, FrameOutput};

/// Per-frame values the page renders: counter, status, progress bar and
/// angle label
#[wasm_bindgen]
pub struct FrameReport {
    output: FrameOutput,
}

#[wasm_bindgen]
impl FrameReport {
    #[wasm_bindgen(getter, js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.output.rep_count
    }

    /// "UP" or "DOWN"
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.output.status.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.output.progress
    }

    /// Smoothed angle in degrees, undefined before the first usable frame
    #[wasm_bindgen(getter, js_name = primaryAngle)]
    pub fn primary_angle(&self) -> Option<f32> {
        self.output.smoothed_angle
    }

    #[wasm_bindgen(getter, js_name = rawAngle)]
    pub fn raw_angle(&self) -> Option<f32> {
        self.output.raw_angle
    }

    #[wasm_bindgen(getter, js_name = labelX)]
    pub fn label_x(&self) -> Option<f32> {
        self.output.label_joint.map(|lm| lm.x)
    }

    #[wasm_bindgen(getter, js_name = labelY)]
    pub fn label_y(&self) -> Option<f32> {
        self.output.label_joint.map(|lm| lm.y)
    }

    /// False when this frame was skipped and prior state is being shown
    #[wasm_bindgen(getter)]
    pub fn tracking(&self) -> bool {
        matches!(self.output.outcome, FrameOutcome::Counted)
    }

    /// Why the frame was skipped, undefined when it was counted
    #[wasm_bindgen(getter, js_name = skipReason)]
    pub fn skip_reason(&self) -> Option<String> {
        match self.output.outcome {
            FrameOutcome::Counted => None,
            FrameOutcome::Skipped(reason) => Some(reason.as_str().to_string()),
        }
    }

    /// True on the frame that completed a repetition
    #[wasm_bindgen(getter, js_name = repCompleted)]
    pub fn rep_completed(&self) -> bool {
        matches!(self.output.transition, Some(crate::counting::Transition::CompletedRep))
    }
}

impl From<FrameOutput> for FrameReport {
    fn from(output: FrameOutput) -> Self {
        Self { output }
    }
}
