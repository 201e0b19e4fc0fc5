use crate::analysis_report::domain::AnalysisReport;
use crate::application::dto::RenderRequest;
use crate::application::read_models::{DashboardView, ReportViewModelBuilder};
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::Result;

/// RenderReportUseCase - loads one report and builds its dashboard view
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderReportUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> RenderReportUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new RenderReportUseCase with injected dependencies
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// A report that cannot be parsed is not an error here: it yields
    /// [`DashboardView::Unavailable`] so the caller renders the empty state.
    ///
    /// # Errors
    /// Returns an error only when the report cannot be read at all
    pub fn execute(&self, request: RenderRequest) -> Result<DashboardView> {
        self.progress_reporter.report(&format!(
            "🔍 Loading analysis report: {}",
            request.report_path.display()
        ));

        let serialized = self.report_reader.read_report(&request.report_path)?;

        let view = match AnalysisReport::parse(&serialized) {
            Ok(report) => {
                let model = ReportViewModelBuilder::new(request.options).build(&report);
                self.progress_reporter.report(&format!(
                    "✅ Report loaded: risk {}/100 ({}), {} suspicious activit{}",
                    model.risk_summary.score,
                    model.risk_summary.level,
                    model.metrics.activity_count,
                    if model.metrics.activity_count == 1 { "y" } else { "ies" }
                ));
                DashboardView::Ready(Box::new(model))
            }
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Report could not be parsed, rendering empty state: {}",
                    e
                ));
                DashboardView::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        Ok(view)
    }
}
