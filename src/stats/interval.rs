use crate::error::StatsError;
use crate::utils::math::normal_probability;

/// Normal-approximation interval for the mean: `mean ± z * sem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanInterval {
    pub lower: f64,
    pub mean: f64,
    pub upper: f64,
    /// Two-sided coverage of `±z` under a standard normal, `2Φ(z) - 1`.
    pub confidence: f64,
}

impl MeanInterval {
    /// Builds the interval from a mean, its standard error and a positive
    /// critical value `z` (e.g. `1.96` for ~95%).
    pub fn new(mean: f64, sem: f64, z: f64) -> Result<Self, StatsError> {
        if !(z.is_finite() && z > 0.0) {
            return Err(StatsError::InvalidConfiguration(format!(
                "z must be a positive finite number, got {z}"
            )));
        }
        let half_width = z * sem;
        Ok(Self {
            lower: mean - half_width,
            mean,
            upper: mean + half_width,
            confidence: 2.0 * normal_probability(z) - 1.0,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
