//! Online standard error of the mean.
//!
//! [`stats::Sem`] tracks the SEM over an unbounded stream and
//! [`stats::RollingSem`] over the most recent `window_size` observations.
//! Both are thin layers over the Welford accumulators in
//! [`crate::core::estimators`], which can be swapped through the
//! [`VarianceEstimator`](crate::core::estimators::VarianceEstimator) traits.

pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod stats;
pub mod streams;
pub mod tasks;
pub mod utils;

pub use error::StatsError;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
