/// Online mean/variance accumulator.
///
/// Implementations accept values incrementally via [`update`] and expose
/// the running mean and the sum of squared deviations from it (`M2`).
/// Inputs are assumed finite; callers validate before forwarding.
///
/// [`update`]: VarianceEstimator::update
pub trait VarianceEstimator {
    /// Incorporates a new observation.
    fn update(&mut self, x: f64);

    /// Number of observations currently accounted for.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Running mean, `0.0` when empty.
    fn mean(&self) -> f64;

    /// Sum of squared deviations from the running mean.
    fn sum_squared_deviations(&self) -> f64;

    /// Returns `M2 / (n - ddof)`.
    ///
    /// When `n <= ddof` the divisor is not positive and the variance is
    /// reported as `0.0`. This is a convention, not a property of the data.
    fn variance(&self, ddof: usize) -> f64 {
        let n = self.len();
        if n <= ddof {
            return 0.0;
        }
        self.sum_squared_deviations().max(0.0) / (n - ddof) as f64
    }

    /// Clears all accumulated state.
    fn reset(&mut self);
}

/// Variance accumulator restricted to the most recent `window_size` values.
pub trait WindowedVarianceEstimator: VarianceEstimator {
    /// Maximum number of retained observations.
    fn window_size(&self) -> usize;

    /// Retained observations, oldest first.
    fn window(&self) -> Vec<f64>;

    fn is_full(&self) -> bool {
        self.len() == self.window_size()
    }
}
