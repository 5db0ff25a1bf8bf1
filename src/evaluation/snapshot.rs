use std::fmt::{Display, Formatter, Result};

/// Value of a statistic after a given number of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub observations_seen: u64,
    pub name: String,
    pub value: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, {}={:.6}",
            self.observations_seen, self.name, self.value
        )
    }
}
