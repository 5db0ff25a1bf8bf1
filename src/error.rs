use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid observation: {0} is not a finite number")]
    InvalidObservation(f64),
}

/// Rejects NaN and infinities before they reach an accumulator.
#[inline]
pub(crate) fn check_observation(x: f64) -> Result<f64, StatsError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(StatsError::InvalidObservation(x))
    }
}
