/// Pull-based source of scalar observations.
///
/// Implementations may represent finite datasets or unbounded generators.
pub trait ValueStream {
    /// Indicates whether the stream *may* produce more values.
    ///
    /// If it returns `false`, a subsequent call to [`next_value`] must
    /// return `None`.
    ///
    /// [`next_value`]: ValueStream::next_value
    fn has_more_values(&self) -> bool;

    /// Produces the next value, or `None` once exhausted.
    fn next_value(&mut self) -> Option<f64>;

    /// Rewinds the stream to its first value.
    fn restart(&mut self);
}
