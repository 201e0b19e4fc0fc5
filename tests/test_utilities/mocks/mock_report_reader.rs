use snakecage_report::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mock ReportReader serving reports from memory
///
/// Every stored report lives in a single virtual directory; unknown paths
/// fail like a missing file would.
#[derive(Default)]
pub struct MockReportReader {
    reports: BTreeMap<PathBuf, Vec<u8>>,
}

impl MockReportReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(self, path: &str, content: &str) -> Self {
        self.with_report_bytes(path, content.as_bytes())
    }

    pub fn with_report_bytes(mut self, path: &str, content: &[u8]) -> Self {
        self.reports.insert(PathBuf::from(path), content.to_vec());
        self
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<Vec<u8>> {
        self.reports
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Analysis report not found: {}", path.display()))
    }

    fn list_reports(&self, _dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.reports.keys().cloned().collect())
    }
}
