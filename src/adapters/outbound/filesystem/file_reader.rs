use crate::ports::outbound::ReportReader;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_report_file, validate_reports_directory};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading reports from disk
///
/// Implements the ReportReader port with the same safety checks for single
/// reports and for every file picked up by a directory listing.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<Vec<u8>> {
        // Rejects symlinks, non-files and oversized files
        validate_report_file(path)?;

        fs::read(path).map_err(|e| {
            ReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn list_reports(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        validate_reports_directory(dir)?;

        let entries = fs::read_dir(dir).map_err(|e| ReportError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut reports = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReportError::FileReadError {
                path: dir.to_path_buf(),
                details: e.to_string(),
            })?;
            let path = entry.path();
            let is_json = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            // file_type() does not follow symlinks, so links are left out here
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_json && is_file {
                reports.push(path);
            }
        }

        reports.sort();
        Ok(reports)
    }
}
