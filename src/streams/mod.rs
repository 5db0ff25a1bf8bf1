mod value_stream;
mod vec_value_stream;

pub use value_stream::ValueStream;
pub use vec_value_stream::VecValueStream;
