//! Session summary for the optional storage endpoint

use serde::Serialize;

use crate::counting::RepStatus;
use crate::error::CounterError;
use crate::exercise::ExerciseKind;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub exercise: ExerciseKind,
    pub rep_count: u32,
    pub status: RepStatus,
    pub frames_processed: u64,
    pub frames_skipped: u64,
}

impl SessionSummary {
    pub fn to_json(&self) -> Result<String, CounterError> {
        Ok(serde_json::to_string(self)?)
    }
}
