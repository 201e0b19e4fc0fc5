/// ProgressReporter port for user feedback on stderr
///
/// Keeps status lines and warnings away from stdout, which carries only
/// rendered output.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a batch of reports
    ///
    /// # Arguments
    /// * `current` - Reports processed so far
    /// * `total` - Reports in the batch
    /// * `message` - Optional detail, e.g. the file being loaded
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem (skipped file, unparseable report)
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
