use crate::core::estimators::{VarianceEstimator, WelfordEstimator};
use crate::error::{StatsError, check_observation};
use crate::stats::{MeanInterval, Statistic, standard_error};
use std::fmt::{Display, Formatter};

/// Running standard error of the mean over an unbounded stream.
///
/// `get()` returns `sqrt(variance(ddof) / n)` where `n` is the number of
/// observations seen. The variance divisor is `n - ddof`; the outer divisor
/// is `n`.
///
/// While `n <= ddof` the variance is taken as `0.0` and so is the SEM. The
/// sampling distribution of the mean is not identifiable from so few
/// observations; `0.0` is a reporting convention, not an estimate.
///
/// The accumulator is injected, [`WelfordEstimator`] by default.
#[derive(Debug, Clone)]
pub struct Sem<E: VarianceEstimator = WelfordEstimator> {
    estimator: E,
    ddof: usize,
}

impl Sem {
    pub fn new(ddof: usize) -> Self {
        log::debug!("creating sem (ddof={ddof})");
        Self::with_estimator(WelfordEstimator::new(), ddof)
    }
}

impl Default for Sem {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<E: VarianceEstimator> Sem<E> {
    pub fn with_estimator(estimator: E, ddof: usize) -> Self {
        Self { estimator, ddof }
    }

    /// Feeds `x` and returns `self` so calls can be chained.
    pub fn update(&mut self, x: f64) -> Result<&mut Self, StatsError> {
        self.estimator.update(check_observation(x)?);
        Ok(self)
    }

    #[inline]
    pub fn get(&self) -> f64 {
        standard_error(self.estimator.variance(self.ddof), self.estimator.len())
    }

    /// Normal-approximation interval `mean ± z * sem`.
    pub fn interval(&self, z: f64) -> Result<MeanInterval, StatsError> {
        MeanInterval::new(self.mean(), self.get(), z)
    }

    pub fn ddof(&self) -> usize {
        self.ddof
    }

    pub fn len(&self) -> usize {
        self.estimator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimator.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.estimator.mean()
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }
}

impl<E: VarianceEstimator> Statistic for Sem<E> {
    fn name(&self) -> String {
        "sem".to_string()
    }

    fn update(&mut self, x: f64) -> Result<(), StatsError> {
        Sem::update(self, x).map(|_| ())
    }

    fn get(&self) -> f64 {
        Sem::get(self)
    }

    fn reset(&mut self) {
        self.estimator.reset();
    }
}

impl<E: VarianceEstimator> Display for Sem<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.6}", self.name(), self.get())
    }
}
