pub mod batch;

pub use batch::{approx_eq_rel, batch_sem};
