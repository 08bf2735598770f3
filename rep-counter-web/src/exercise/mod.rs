//! Exercise module - per-exercise joint and threshold configuration
//!
//! Re-exports only. All logic in submodules.

mod profile;

pub use profile::{ExerciseKind, ExerciseProfile, JointTriple, PROFILES};
