use crate::error::StatsError;
use crate::evaluation::{Curve, Snapshot};
use crate::stats::Statistic;
use crate::streams::ValueStream;

/// Drives a statistic over a value stream, sampling it into a [`Curve`].
///
/// A snapshot is taken every `sample_frequency` observations and once more
/// when the run ends, unless the last periodic one already covers it.
pub struct StreamSummary {
    statistic: Box<dyn Statistic>,
    stream: Box<dyn ValueStream>,

    curve: Curve,

    max_observations: Option<u64>,
    sample_frequency: u64,

    processed: u64,
}

impl StreamSummary {
    pub fn new(
        statistic: Box<dyn Statistic>,
        stream: Box<dyn ValueStream>,
        max_observations: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, StatsError> {
        if sample_frequency == 0 {
            return Err(StatsError::InvalidConfiguration(
                "sample_frequency must be > 0".into(),
            ));
        }

        Ok(Self {
            statistic,
            stream,
            curve: Curve::default(),
            max_observations,
            sample_frequency,
            processed: 0,
        })
    }

    /// Consumes the stream until it is exhausted or `max_observations` is
    /// reached.
    ///
    /// A non-finite value aborts the run with the statistic's error; the
    /// snapshots taken so far are kept.
    pub fn run(&mut self) -> Result<(), StatsError> {
        while self.stream.has_more_values() {
            if let Some(n) = self.max_observations {
                if self.processed >= n {
                    break;
                }
            }
            let Some(x) = self.stream.next_value() else {
                break;
            };

            self.statistic.update(x)?;
            self.processed += 1;

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        let covered = self
            .curve
            .latest()
            .is_some_and(|s| s.observations_seen == self.processed);
        if !covered {
            self.push_snapshot();
        }
        log::info!(
            "{} finished after {} observations",
            self.statistic.name(),
            self.processed
        );
        Ok(())
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn statistic(&self) -> &dyn Statistic {
        self.statistic.as_ref()
    }

    fn push_snapshot(&mut self) {
        let m = self.statistic.measurement();
        let snapshot = Snapshot {
            observations_seen: self.processed,
            name: m.name,
            value: m.value,
        };
        log::debug!("{snapshot}");
        self.curve.push(snapshot);
    }
}
