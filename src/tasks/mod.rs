mod stream_summary;

pub use stream_summary::StreamSummary;
