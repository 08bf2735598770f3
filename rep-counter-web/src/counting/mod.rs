//! Counting module - noisy joint angle in, discrete repetitions out
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod smoothing;
mod direction;
mod rep_state;
mod progress;
mod visibility_gate;

pub use angles::{joint_angle, landmark_angle};
pub use smoothing::Smoother;
pub use direction::{Direction, DirectionTracker};
pub use rep_state::{RepStateMachine, RepStatus, Thresholds, Transition};
pub use progress::{rep_progress, ProgressPolicy};
pub use visibility_gate::VisibilityGate;
