use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest report file accepted (20 MB)
///
/// Reports embed captured stdout/stderr and monitoring series; anything
/// beyond this is not a report the sandbox backend produces.
pub const MAX_REPORT_SIZE: u64 = 20 * 1024 * 1024;

/// Rejects symbolic links for the given operation
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Pass the real path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path is a regular report file within the size limit
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds [`MAX_REPORT_SIZE`]
pub fn validate_report_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::ReportNotFound {
            path: path.to_path_buf(),
            suggestion: "Reports are saved as <execution_id>.json in the sandbox reports directory"
                .to_string(),
        }
        .into());
    }

    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(ReportError::InvalidReportPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_REPORT_SIZE)
}

/// Validates that a path is a real directory (used for the history index)
pub fn validate_reports_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::InvalidReportPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    validate_not_symlink(path, "list")?;

    if !path.is_dir() {
        return Err(ReportError::InvalidReportPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Analysis reports are expected to be well under the size limit".to_string(),
        }
        .into());
    }
    Ok(())
}
