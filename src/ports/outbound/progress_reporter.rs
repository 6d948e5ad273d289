/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts diagnostic output (e.g., to stderr) so that the
/// rendered exclusion set is the only thing written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the list of shaded jars
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
