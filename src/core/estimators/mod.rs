mod rolling_welford_estimator;
mod variance_estimator;
mod welford_estimator;

pub use rolling_welford_estimator::RollingWelfordEstimator;
pub use variance_estimator::{VarianceEstimator, WindowedVarianceEstimator};
pub use welford_estimator::WelfordEstimator;
