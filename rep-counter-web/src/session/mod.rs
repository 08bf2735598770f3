//! Session module - per-person counting state and per-frame orchestration
//!
//! Re-exports only. All logic in submodules.

mod counter;
mod frame;
mod summary;

pub use counter::CounterSession;
pub use frame::{FrameOutcome, FrameOutput, SkipReason};
pub use summary::SessionSummary;
