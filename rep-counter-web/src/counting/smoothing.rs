//! Moving-average smoother for joint angles
//!
//! Keeps the most recent `window` samples and reports their mean. At 30-60
//! fps a window of 10 damps landmark jitter while lagging real motion by
//! well under a quarter second.

use std::collections::VecDeque;

use crate::config::DEFAULT_SMOOTHING_WINDOW;

/// Fixed-capacity FIFO of angle samples
pub struct Smoother {
    /// Oldest sample at the front
    samples: VecDeque<f32>,
    window: usize,
}

impl Smoother {
    /// A window of 0 is treated as 1
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            samples: VecDeque::with_capacity(window),
            window,
        }
    }

    /// Append a sample, evicting the oldest once full, and return the mean
    /// of the current window.
    pub fn push(&mut self, sample: f32) -> f32 {
        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);

        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32
    }

    /// Mean of the current window, `None` before the first sample
    pub fn mean(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f32 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f32)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singleton_mean() {
        let mut smoother = Smoother::default();
        assert_eq!(smoother.mean(), None);
        assert_eq!(smoother.push(42.0), 42.0);
        assert_eq!(smoother.mean(), Some(42.0));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut smoother = Smoother::new(3);
        smoother.push(10.0);
        smoother.push(20.0);
        smoother.push(30.0);
        assert_eq!(smoother.push(40.0), 30.0);
        assert_eq!(smoother.len(), 3);
    }

    #[test]
    fn test_clear_starts_fresh_mean() {
        let mut smoother = Smoother::new(4);
        smoother.push(170.0);
        smoother.push(160.0);
        smoother.clear();
        assert!(smoother.is_empty());
        assert_eq!(smoother.push(90.0), 90.0);
    }

    #[test]
    fn test_zero_window_is_one() {
        let mut smoother = Smoother::new(0);
        assert_eq!(smoother.window(), 1);
        smoother.push(1.0);
        assert_eq!(smoother.push(5.0), 5.0);
    }

    #[test]
    fn mean_tracks_last_window() {
        proptest!(|(samples in prop::collection::vec(0.0f32..180.0, 1..40), window in 1usize..15)| {
            let mut smoother = Smoother::new(window);
            let mut out = 0.0;
            for &s in &samples {
                out = smoother.push(s);
            }
            let tail = &samples[samples.len().saturating_sub(window)..];
            let expected = tail.iter().sum::<f32>() / tail.len() as f32;
            prop_assert!((out - expected).abs() < 1e-3);
            prop_assert!(smoother.len() <= window);
        });
    }
}
