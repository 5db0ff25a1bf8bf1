use crate::core::estimators::{VarianceEstimator, WindowedVarianceEstimator};
use crate::error::StatsError;
use std::collections::VecDeque;

/// Running mean and variance over the last `window_size` observations.
///
/// Values are kept in a FIFO buffer. Once the buffer is full, each new value
/// replaces the oldest one and the mean and `M2` are adjusted in O(1) with
/// the Welford replace step:
///
/// ```text
/// mean' = mean + (x - old) / n
/// M2'   = M2 + (x - old) * (x - mean' + old - mean)
/// ```
///
/// Rounding error of the replace step would otherwise persist for the life
/// of the stream, so mean and `M2` are recomputed from the buffer after
/// every `window_size` replacements (amortized O(1)).
#[derive(Debug, Clone)]
pub struct RollingWelfordEstimator {
    window_size: usize,
    window: VecDeque<f64>,
    mean: f64,
    m2: f64,
    since_resync: usize,
}

/// Upper bound on the buffer preallocated at construction; larger windows
/// grow on demand.
const MAX_INITIAL_CAPACITY: usize = 1024;

impl RollingWelfordEstimator {
    pub fn new(window_size: usize) -> Result<Self, StatsError> {
        if window_size == 0 {
            return Err(StatsError::InvalidConfiguration(
                "window_size must be > 0".into(),
            ));
        }
        Ok(Self {
            window_size,
            window: VecDeque::with_capacity(window_size.min(MAX_INITIAL_CAPACITY)),
            mean: 0.0,
            m2: 0.0,
            since_resync: 0,
        })
    }

    #[inline]
    fn add(&mut self, x: f64) {
        self.window.push_back(x);
        let n = self.window.len() as f64;
        let delta = x - self.mean;
        self.mean += delta / n;
        self.m2 += delta * (x - self.mean);
    }

    #[inline]
    fn replace(&mut self, old: f64, x: f64) {
        self.window.push_back(x);
        let n = self.window.len() as f64;
        let prev_mean = self.mean;
        self.mean += (x - old) / n;
        self.m2 += (x - old) * (x - self.mean + old - prev_mean);
        // rounding can push M2 marginally below zero for near-constant windows
        if self.m2 < 0.0 {
            self.m2 = 0.0;
        }

        self.since_resync += 1;
        if self.since_resync >= self.window_size {
            self.resync();
        }
    }

    /// Two-pass recomputation of mean and `M2` over the retained values.
    fn resync(&mut self) {
        let n = self.window.len() as f64;
        let mean = self.window.iter().sum::<f64>() / n;
        self.m2 = self.window.iter().map(|x| (x - mean).powi(2)).sum();
        self.mean = mean;
        self.since_resync = 0;
    }
}

impl VarianceEstimator for RollingWelfordEstimator {
    fn update(&mut self, x: f64) {
        if self.window.len() == self.window_size {
            if let Some(old) = self.window.pop_front() {
                self.replace(old, x);
                return;
            }
        }
        self.add(x);
    }

    #[inline]
    fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    fn sum_squared_deviations(&self) -> f64 {
        self.m2
    }

    fn reset(&mut self) {
        self.window.clear();
        self.mean = 0.0;
        self.m2 = 0.0;
        self.since_resync = 0;
    }
}

impl WindowedVarianceEstimator for RollingWelfordEstimator {
    #[inline]
    fn window_size(&self) -> usize {
        self.window_size
    }

    fn window(&self) -> Vec<f64> {
        self.window.iter().copied().collect()
    }
}
