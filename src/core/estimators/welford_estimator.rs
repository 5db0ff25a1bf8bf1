use crate::core::estimators::VarianceEstimator;

/// Unbounded running mean and variance using Welford's algorithm.
///
/// O(1) memory. Avoids the catastrophic cancellation of the naive
/// `sum(x^2) - n * mean^2` formulation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WelfordEstimator {
    n: usize,
    mean: f64,
    m2: f64,
}

impl WelfordEstimator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VarianceEstimator for WelfordEstimator {
    #[inline]
    fn update(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    #[inline]
    fn len(&self) -> usize {
        self.n
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
        *self = Self::default();
    }
}
