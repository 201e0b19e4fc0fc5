//! Builder for the history index of past executions

use super::history_view::{HistoryEntryView, HistoryView};
use super::report_view_model_builder::ReportViewModelBuilder;
use crate::analysis_report::domain::AnalysisReport;

/// Builds a [`HistoryView`] from loaded reports
pub struct HistoryBuilder;

impl HistoryBuilder {
    /// Summarizes each report and orders them newest first
    ///
    /// Timestamps are compared as text, which matches the backend's
    /// `YYYY-MM-DD_HH-MM-SS` naming. Reports without a timestamp go last;
    /// ties keep their input order.
    ///
    /// # Arguments
    /// * `reports` - `(source, report)` pairs, `source` being the file name
    /// * `skipped` - number of files that failed to parse
    pub fn build(reports: Vec<(String, AnalysisReport)>, skipped: usize) -> HistoryView {
        let mut entries: Vec<HistoryEntryView> = reports
            .into_iter()
            .map(|(source, report)| {
                let risk = ReportViewModelBuilder::build_risk_summary(&report);
                let header = ReportViewModelBuilder::build_header(&report);
                HistoryEntryView {
                    source,
                    execution_id: header.execution_id,
                    timestamp: header.timestamp,
                    risk_score: risk.score,
                    risk_level: risk.level,
                    level_class: risk.level_class,
                    summary: header.summary,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        HistoryView { entries, skipped }
    }
}
