mod curve;
mod measurement;
mod snapshot;

pub use curve::Curve;
pub use measurement::Measurement;
pub use snapshot::Snapshot;
