use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ReportReader port for loading serialized analysis reports
///
/// This port abstracts where reports live, so use cases can be exercised
/// against in-memory fixtures.
pub trait ReportReader {
    /// Reads the raw serialized report at `path`
    ///
    /// Bytes are returned undecoded; text encoding problems are the
    /// parser's concern.
    ///
    /// # Errors
    /// Returns an error if the report does not exist, is not a regular
    /// file, or cannot be read
    fn read_report(&self, path: &Path) -> Result<Vec<u8>>;

    /// Lists report files (`*.json`) in `dir`, sorted by path
    ///
    /// # Errors
    /// Returns an error if `dir` is not a readable directory
    fn list_reports(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}
