use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to gate on report risk separately from
/// tool failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report rendered, risk below any configured threshold
    Success = 0,
    /// The rendered report's risk level reached the `--fail-on` threshold
    RiskThresholdExceeded = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing file, file I/O error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RiskThresholdExceeded => write!(f, "Risk Threshold Exceeded (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report rendering.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping every user-facing message paired with a hint.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The serialized report could not be interpreted as a JSON object
    #[error("Failed to parse analysis report\nDetails: {details}\n\n💡 Hint: The report must be a JSON object produced by the sandbox backend")]
    ReportParse { details: String },

    #[error("Analysis report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid report path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a report file or a reports directory")]
    InvalidReportPath { path: PathBuf, reason: String },

    /// Validation error for configuration and arguments
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl ReportError {
    /// Convenience constructor for parse failures
    pub fn parse(details: impl Into<String>) -> Self {
        ReportError::ReportParse {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::RiskThresholdExceeded.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::RiskThresholdExceeded),
            "Risk Threshold Exceeded (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_report_parse_display() {
        let error = ReportError::parse("expected value at line 1 column 1");
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse analysis report"));
        assert!(display.contains("expected value at line 1 column 1"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_report_not_found_display() {
        let error = ReportError::ReportNotFound {
            path: PathBuf::from("/reports/abc.json"),
            suggestion: "Check the execution id".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Analysis report not found"));
        assert!(display.contains("/reports/abc.json"));
        assert!(display.contains("Check the execution id"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReportError::FileWriteError {
            path: PathBuf::from("/test/output.html"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.html"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_report_path_display() {
        let error = ReportError::InvalidReportPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Not a directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid report path"));
        assert!(display.contains("Not a directory"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ReportError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
