//! Dashboard view model
//!
//! The presentation-ready result of a single report: plain data, built once,
//! consumed by a formatter and discarded.

use super::chart_view::ChartSeriesView;
use super::timeline_view::TimelineEntryView;
use crate::analysis_report::domain::RiskLevel;
use serde::Serialize;

/// Placeholder rendered when the sandbox captured no stdout
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output";

/// Placeholder rendered when the sandbox captured no stderr
pub const NO_ERRORS_PLACEHOLDER: &str = "No errors";

/// What a formatter is asked to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DashboardView {
    /// A report was parsed and its view model built
    Ready(Box<RenderedViewModel>),
    /// The report could not be parsed; render the empty state
    Unavailable { reason: String },
}

impl DashboardView {
    pub fn view_model(&self) -> Option<&RenderedViewModel> {
        match self {
            DashboardView::Ready(model) => Some(model),
            DashboardView::Unavailable { .. } => None,
        }
    }
}

/// Main view model for one analysis report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedViewModel {
    pub header: ReportHeaderView,
    pub risk_summary: RiskSummaryView,
    /// Activities ordered by severity rank, ties in report order
    pub timeline: Vec<TimelineEntryView>,
    pub metrics: MetricsView,
    #[serde(flatten)]
    pub outputs: OutputsView,
    pub recommendations: Vec<RecommendationView>,
    pub charts: Vec<ChartSeriesView>,
}

/// Identity of the execution the report describes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeaderView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummaryView {
    /// Always within 0..=100
    pub score: u8,
    pub level: RiskLevel,
    pub level_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsView {
    pub execution_time_seconds: f64,
    pub activity_count: usize,
    pub imported_module_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeded: Option<bool>,
    pub timed_out: bool,
    pub severity_breakdown: SeverityBreakdownView,
}

/// Activity counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityBreakdownView {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

/// Captured process output, placeholders substituted for empty streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputsView {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub title: String,
    pub description: String,
}
