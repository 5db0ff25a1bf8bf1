use crate::streams::ValueStream;

/// Finite stream replaying an in-memory vector.
#[derive(Debug, Clone)]
pub struct VecValueStream {
    values: Vec<f64>,
    idx: usize,
}

impl VecValueStream {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, idx: 0 }
    }
}

impl From<Vec<f64>> for VecValueStream {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl ValueStream for VecValueStream {
    fn has_more_values(&self) -> bool {
        self.idx < self.values.len()
    }

    fn next_value(&mut self) -> Option<f64> {
        let v = *self.values.get(self.idx)?;
        self.idx += 1;
        Some(v)
    }

    fn restart(&mut self) {
        self.idx = 0;
    }
}
