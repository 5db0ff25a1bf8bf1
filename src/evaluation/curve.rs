use crate::evaluation::Snapshot;

/// In-memory sequence of [`Snapshot`]s, in the order they were taken.
#[derive(Debug, Clone, Default)]
pub struct Curve {
    entries: Vec<Snapshot>,
}

impl Curve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    /// Values only, in snapshot order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|s| s.value).collect()
    }
}
