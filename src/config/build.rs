use crate::config::{RollingSemParameters, SemParameters, StatisticChoice};
use crate::error::StatsError;
use crate::stats::{RollingSem, Sem, Statistic};

fn to_usize(field: &str, v: i64, min: usize) -> Result<usize, StatsError> {
    match usize::try_from(v) {
        Ok(n) if n >= min => Ok(n),
        _ => Err(StatsError::InvalidConfiguration(format!(
            "{field} must be >= {min}, got {v}"
        ))),
    }
}

impl TryFrom<SemParameters> for Sem {
    type Error = StatsError;

    fn try_from(p: SemParameters) -> Result<Self, Self::Error> {
        Ok(Sem::new(to_usize("ddof", p.ddof, 0)?))
    }
}

impl TryFrom<RollingSemParameters> for RollingSem {
    type Error = StatsError;

    fn try_from(p: RollingSemParameters) -> Result<Self, Self::Error> {
        let window_size = to_usize("window_size", p.window_size, 1)?;
        let ddof = to_usize("ddof", p.ddof, 0)?;
        RollingSem::new(window_size, ddof)
    }
}

pub fn build_statistic(choice: StatisticChoice) -> Result<Box<dyn Statistic>, StatsError> {
    match choice {
        StatisticChoice::Sem(p) => Ok(Box::new(Sem::try_from(p)?)),
        StatisticChoice::RollingSem(p) => Ok(Box::new(RollingSem::try_from(p)?)),
    }
}
