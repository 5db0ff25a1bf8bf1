use crate::error::StatsError;
use crate::evaluation::Measurement;

/// Online univariate statistic.
///
/// Object safe so heterogeneous statistics can be driven through
/// `Box<dyn Statistic>`. Concrete types additionally offer a chaining
/// `update` that returns `&mut Self`.
pub trait Statistic {
    /// Display label, e.g. `"sem"` or `"rolling_3_sem"`.
    fn name(&self) -> String;

    /// Incorporates a new observation.
    ///
    /// Non-finite values are rejected with [`StatsError::InvalidObservation`]
    /// and leave the statistic unchanged.
    fn update(&mut self, x: f64) -> Result<(), StatsError>;

    /// Current value. Pure read.
    fn get(&self) -> f64;

    /// Returns to the freshly constructed state (configuration is kept).
    fn reset(&mut self);

    fn measurement(&self) -> Measurement {
        Measurement::new(self.name(), self.get())
    }
}
