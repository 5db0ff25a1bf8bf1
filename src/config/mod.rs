//! Serializable statistic configuration.
//!
//! ```
//! use running_sem::config::{StatisticChoice, build_statistic};
//! use running_sem::stats::Statistic;
//!
//! let choice = StatisticChoice::from_json(
//!     r#"{"type": "rolling-sem", "params": {"window_size": 3, "ddof": 1}}"#,
//! )
//! .unwrap();
//! let mut stat = build_statistic(choice).unwrap();
//! stat.update(1.0).unwrap();
//! assert_eq!(stat.name(), "rolling_3_sem");
//! ```

mod build;
mod choice;
mod statistic_choice;

pub use build::build_statistic;
pub use choice::Choice;
pub use statistic_choice::*;
