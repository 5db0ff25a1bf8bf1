use crate::core::estimators::{RollingWelfordEstimator, WindowedVarianceEstimator};
use crate::error::{StatsError, check_observation};
use crate::stats::{MeanInterval, Statistic, standard_error};
use std::fmt::{Display, Formatter};

/// Running standard error of the mean over a sliding window.
///
/// `get()` returns `sqrt(variance(ddof) / occupancy)` where occupancy is the
/// number of retained values, `min(seen, window_size)`. Same `<= ddof`
/// convention as [`Sem`](crate::stats::Sem).
#[derive(Debug, Clone)]
pub struct RollingSem<E: WindowedVarianceEstimator = RollingWelfordEstimator> {
    estimator: E,
    ddof: usize,
}

impl RollingSem {
    pub fn new(window_size: usize, ddof: usize) -> Result<Self, StatsError> {
        let estimator = RollingWelfordEstimator::new(window_size)?;
        log::debug!("creating rolling sem (window_size={window_size}, ddof={ddof})");
        Ok(Self::with_estimator(estimator, ddof))
    }
}

impl<E: WindowedVarianceEstimator> RollingSem<E> {
    pub fn with_estimator(estimator: E, ddof: usize) -> Self {
        Self { estimator, ddof }
    }

    /// Feeds `x`, evicting the oldest retained value once the window is full.
    pub fn update(&mut self, x: f64) -> Result<&mut Self, StatsError> {
        self.estimator.update(check_observation(x)?);
        Ok(self)
    }

    #[inline]
    pub fn get(&self) -> f64 {
        standard_error(self.estimator.variance(self.ddof), self.estimator.len())
    }

    pub fn window_size(&self) -> usize {
        self.estimator.window_size()
    }

    /// Normal-approximation interval `mean ± z * sem`.
    pub fn interval(&self, z: f64) -> Result<MeanInterval, StatsError> {
        MeanInterval::new(self.mean(), self.get(), z)
    }

    pub fn ddof(&self) -> usize {
        self.ddof
    }

    /// Number of retained values.
    pub fn len(&self) -> usize {
        self.estimator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimator.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.estimator.mean()
    }

    /// Retained values, oldest first.
    pub fn window(&self) -> Vec<f64> {
        self.estimator.window()
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }
}

impl<E: WindowedVarianceEstimator> Statistic for RollingSem<E> {
    fn name(&self) -> String {
        format!("rolling_{}_sem", self.window_size())
    }

    fn update(&mut self, x: f64) -> Result<(), StatsError> {
        RollingSem::update(self, x).map(|_| ())
    }

    fn get(&self) -> f64 {
        RollingSem::get(self)
    }

    fn reset(&mut self) {
        self.estimator.reset();
    }
}

impl<E: WindowedVarianceEstimator> Display for RollingSem<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.6}", self.name(), self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{approx_eq_rel, batch_sem};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const XS: [f64; 6] = [1.0, 4.0, 2.0, -4.0, -8.0, 0.0];

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn trace(window_size: usize, ddof: usize, xs: &[f64]) -> Vec<f64> {
        let mut sem = RollingSem::new(window_size, ddof).unwrap();
        xs.iter().map(|&x| sem.update(x).unwrap().get()).collect()
    }

    #[test]
    fn window_of_two_matches_reference() {
        let got = trace(2, 1, &XS);
        let want = [0.0, 1.5, 1.0, 3.0, 2.0, 4.0];
        for (g, w) in got.iter().zip(want) {
            assert!(approx_eq(*g, w, 1e-9), "got {g}, want {w}");
        }
    }

    #[test]
    fn window_of_three_matches_reference() {
        let got = trace(3, 1, &XS);
        let want = [
            0.0,
            1.5,
            0.881917104,
            2.403700505,
            2.905932629,
            2.309401077,
        ];
        for (g, w) in got.iter().zip(want) {
            assert!(approx_eq(*g, w, 1e-6), "got {g}, want {w}");
        }
    }

    #[test]
    fn window_of_one_is_always_zero() {
        for ddof in 1..4 {
            for v in trace(1, ddof, &XS) {
                assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn zero_window_fails_fast() {
        assert!(matches!(
            RollingSem::new(0, 1),
            Err(StatsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn occupancy_is_capped_and_window_holds_latest_values() {
        let mut sem = RollingSem::new(3, 1).unwrap();
        for (i, &x) in XS.iter().enumerate() {
            sem.update(x).unwrap();
            assert_eq!(sem.len(), (i + 1).min(3));
        }
        assert_eq!(sem.window(), vec![-4.0, -8.0, 0.0]);
        assert!(approx_eq(sem.mean(), -4.0, 1e-12));
    }

    #[test]
    fn incremental_matches_batch_over_last_values() {
        let mut rng = StdRng::seed_from_u64(2024);
        let xs: Vec<f64> = (0..300).map(|_| rng.random_range(-10.0..10.0)).collect();

        for (w, ddof) in [(1usize, 0usize), (4, 1), (10, 2), (50, 1), (500, 1)] {
            for len in [1usize, 3, 49, 300] {
                let got = *trace(w, ddof, &xs[..len]).last().unwrap();
                let tail = &xs[len - len.min(w)..len];
                let want = batch_sem(tail, ddof);
                assert!(
                    approx_eq_rel(got, want, 1e-9),
                    "w={w} ddof={ddof} len={len}: got {got}, want {want}"
                );
            }
        }
    }

    #[test]
    fn reads_are_idempotent_after_eviction() {
        let mut sem = RollingSem::new(3, 1).unwrap();
        for x in XS {
            sem.update(x).unwrap();
        }
        let a = sem.get();
        let b = sem.get();
        let c = Statistic::get(&sem);
        assert_eq!(a.to_bits(), b.to_bits());
        assert_eq!(a.to_bits(), c.to_bits());
        assert_eq!(sem.window(), vec![-4.0, -8.0, 0.0]);
    }

    #[test]
    fn huge_window_is_usable() {
        let mut sem = RollingSem::new(usize::MAX, 1).unwrap();
        sem.update(1.0).unwrap().update(4.0).unwrap();
        assert_eq!(sem.get(), 1.5);
        assert_eq!(sem.len(), 2);
    }

    #[test]
    fn constant_window_after_long_stream_is_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sem = RollingSem::new(3, 1).unwrap();
        for _ in 0..1_000_000 {
            sem.update(rng.random_range(-1e6..1e6)).unwrap();
        }
        for _ in 0..6 {
            sem.update(5.0).unwrap();
        }
        assert_eq!(sem.get(), 0.0);

        sem.update(5.0).unwrap().update(6.0).unwrap().update(7.0).unwrap();
        assert!(approx_eq_rel(sem.get(), batch_sem(&[5.0, 6.0, 7.0], 1), 1e-9));
    }

    #[test]
    fn exposes_injected_estimator() {
        let mut sem = RollingSem::new(2, 1).unwrap();
        sem.update(1.0).unwrap().update(4.0).unwrap().update(2.0).unwrap();
        assert_eq!(sem.estimator().window(), vec![4.0, 2.0]);
        assert!(sem.estimator().is_full());
    }

    #[test]
    fn rejects_non_finite_without_touching_window() {
        let mut sem = RollingSem::new(2, 1).unwrap();
        sem.update(1.0).unwrap().update(4.0).unwrap();
        assert!(matches!(
            sem.update(f64::NEG_INFINITY),
            Err(StatsError::InvalidObservation(_))
        ));
        assert_eq!(sem.window(), vec![1.0, 4.0]);
        assert_eq!(sem.get(), 1.5);
    }

    #[test]
    fn name_follows_window_size() {
        let sem = RollingSem::new(3, 1).unwrap();
        assert_eq!(sem.name(), "rolling_3_sem");
        assert_eq!(sem.to_string(), "rolling_3_sem: 0.000000");
    }

    #[test]
    fn reset_empties_window() {
        let mut sem = RollingSem::new(2, 1).unwrap();
        sem.update(1.0).unwrap().update(4.0).unwrap().update(2.0).unwrap();
        Statistic::reset(&mut sem);
        assert!(sem.is_empty());
        assert_eq!(sem.window_size(), 2);
        assert_eq!(sem.get(), 0.0);
        assert_eq!(sem.update(5.0).unwrap().update(7.0).unwrap().get(), 1.0);
    }
}
