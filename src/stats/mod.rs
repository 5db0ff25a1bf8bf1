//! Running standard error of the mean.
//!
//! ```
//! use running_sem::stats::{RollingSem, Sem};
//!
//! let mut sem = Sem::new(1);
//! for x in [3.0, 5.0, 4.0, 7.0, 10.0, 12.0] {
//!     sem.update(x).unwrap();
//! }
//! assert!((sem.get() - 1.447219).abs() < 1e-6);
//!
//! let mut rolling = RollingSem::new(2, 1).unwrap();
//! let last = rolling.update(1.0).unwrap().update(4.0).unwrap().get();
//! assert_eq!(last, 1.5);
//! ```

mod interval;
mod rolling_sem;
mod sem;
mod statistic;

pub use interval::MeanInterval;
pub use rolling_sem::RollingSem;
pub use sem::Sem;
pub use statistic::Statistic;

/// `sqrt(variance / n)`, or `0.0` when nothing has been observed.
#[inline]
pub(crate) fn standard_error(variance: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (variance / n as f64).sqrt()
}
