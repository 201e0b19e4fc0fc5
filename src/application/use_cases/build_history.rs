use crate::analysis_report::domain::AnalysisReport;
use crate::application::dto::HistoryRequest;
use crate::application::read_models::{HistoryBuilder, HistoryView};
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::Result;

/// BuildHistoryUseCase - summarizes every report in a directory
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildHistoryUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> BuildHistoryUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildHistoryUseCase with injected dependencies
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Files that cannot be read or parsed are skipped with a warning and
    /// counted in [`HistoryView::skipped`].
    ///
    /// # Errors
    /// Returns an error if the directory itself cannot be listed
    pub fn execute(&self, request: HistoryRequest) -> Result<HistoryView> {
        let paths = self.report_reader.list_reports(&request.reports_dir)?;
        let total = paths.len();

        self.progress_reporter.report(&format!(
            "📚 Indexing {} report file(s) in {}",
            total,
            request.reports_dir.display()
        ));

        let mut reports = Vec::with_capacity(total);
        let mut skipped = 0;

        for (i, path) in paths.iter().enumerate() {
            let source = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.progress_reporter
                .report_progress(i + 1, total, Some(&source));

            let parsed = self.report_reader.read_report(path).and_then(|serialized| {
                AnalysisReport::parse(&serialized).map_err(Into::into)
            });

            match parsed {
                Ok(report) => reports.push((source, report)),
                Err(e) => {
                    skipped += 1;
                    self.progress_reporter
                        .report_warning(&format!("⚠️  Skipping {}: {}", source, e));
                }
            }
        }

        let history = HistoryBuilder::build(reports, skipped);
        self.progress_reporter.report_completion(&format!(
            "✅ History index built: {} report(s), {} skipped",
            history.entries.len(),
            history.skipped
        ));

        Ok(history)
    }
}
