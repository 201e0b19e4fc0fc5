//! Read models for the dashboard
//!
//! This module contains view-optimized structs derived from analysis
//! reports, plus the builders that produce them.

pub mod chart_view;
pub mod history_builder;
pub mod history_view;
pub mod report_view_model;
pub mod report_view_model_builder;
pub mod timeline_view;

pub use chart_view::{ChartSeriesView, MetricStream};
pub use history_builder::HistoryBuilder;
pub use history_view::{HistoryEntryView, HistoryView};
pub use report_view_model::{
    DashboardView, MetricsView, OutputsView, RecommendationView, RenderedViewModel,
    ReportHeaderView, RiskSummaryView, SeverityBreakdownView, NO_ERRORS_PLACEHOLDER,
    NO_OUTPUT_PLACEHOLDER,
};
pub use report_view_model_builder::{DisplayTimeZone, ReportViewModelBuilder, ViewModelOptions};
pub use timeline_view::TimelineEntryView;
