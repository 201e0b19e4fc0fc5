use crate::application::read_models::ViewModelOptions;
use std::path::PathBuf;

/// Request to render a single report
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Path to the report JSON file
    pub report_path: PathBuf,
    pub options: ViewModelOptions,
}

impl RenderRequest {
    pub fn new(report_path: PathBuf, options: ViewModelOptions) -> Self {
        Self {
            report_path,
            options,
        }
    }
}

/// Request to build the history index of a reports directory
#[derive(Debug, Clone)]
pub struct HistoryRequest {
    pub reports_dir: PathBuf,
}

impl HistoryRequest {
    pub fn new(reports_dir: PathBuf) -> Self {
        Self { reports_dir }
    }
}
