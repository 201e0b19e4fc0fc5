//! Builder for constructing the dashboard view model from a report
//!
//! Every function here is pure: it borrows the report, never mutates it, and
//! yields identical output for identical input.

use super::chart_view::{ChartSeriesView, MetricStream};
use super::report_view_model::{
    MetricsView, OutputsView, RecommendationView, RenderedViewModel, ReportHeaderView,
    RiskSummaryView, SeverityBreakdownView, NO_ERRORS_PLACEHOLDER, NO_OUTPUT_PLACEHOLDER,
};
use super::timeline_view::TimelineEntryView;
use crate::analysis_report::domain::{AnalysisReport, MetricSample, RiskLevel, Severity};
use crate::analysis_report::services::{humanize_activity_type, SeriesSampler};
use chrono::{DateTime, Local, Utc};
use std::str::FromStr;

/// Label used for samples without a usable timestamp
const MISSING_TIMESTAMP_LABEL: &str = "n/a";

/// Clock used to label chart timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayTimeZone {
    /// The viewer's local time, like a browser dashboard
    #[default]
    Local,
    Utc,
}

impl DisplayTimeZone {
    /// Formats epoch seconds as `HH:MM:SS`
    pub fn format_epoch(self, epoch_seconds: f64) -> String {
        if !epoch_seconds.is_finite() {
            return MISSING_TIMESTAMP_LABEL.to_string();
        }
        let secs = epoch_seconds.floor();
        // Fractions just below 1.0 can round up to a full second
        let nanos = (((epoch_seconds - secs) * 1e9) as u32).min(999_999_999);
        match DateTime::<Utc>::from_timestamp(secs as i64, nanos) {
            Some(utc) => match self {
                DisplayTimeZone::Utc => utc.format("%H:%M:%S").to_string(),
                DisplayTimeZone::Local => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
            },
            None => MISSING_TIMESTAMP_LABEL.to_string(),
        }
    }
}

impl FromStr for DisplayTimeZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(DisplayTimeZone::Local),
            "utc" => Ok(DisplayTimeZone::Utc),
            _ => Err(format!(
                "Invalid timezone: {}. Please specify 'local' or 'utc'",
                s
            )),
        }
    }
}

/// Presentation options that are not part of the report itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewModelOptions {
    pub time_zone: DisplayTimeZone,
    pub sampler: SeriesSampler,
}

/// Transforms an [`AnalysisReport`] into a [`RenderedViewModel`]
///
/// Total over any structurally partial report: missing or malformed optional
/// data falls back to empty sequences, zeros, and placeholder text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportViewModelBuilder {
    options: ViewModelOptions,
}

impl ReportViewModelBuilder {
    pub fn new(options: ViewModelOptions) -> Self {
        Self { options }
    }

    /// Builds the full view model
    pub fn build(&self, report: &AnalysisReport) -> RenderedViewModel {
        RenderedViewModel {
            header: Self::build_header(report),
            risk_summary: Self::build_risk_summary(report),
            timeline: Self::build_timeline(report),
            metrics: Self::build_metrics(report),
            outputs: Self::build_outputs(report),
            recommendations: Self::build_recommendations(report),
            charts: self.build_charts(report),
        }
    }

    pub fn build_header(report: &AnalysisReport) -> ReportHeaderView {
        ReportHeaderView {
            execution_id: non_empty(report.execution_id.as_deref()),
            timestamp: non_empty(report.timestamp.as_deref()),
            summary: non_empty(report.summary.as_deref()),
        }
    }

    /// Clamps the score into `0..=100` and maps the level to its CSS token
    pub fn build_risk_summary(report: &AnalysisReport) -> RiskSummaryView {
        let level = RiskLevel::classify(report.risk_level.as_deref());
        RiskSummaryView {
            score: clamp_score(report.risk_score),
            level,
            level_class: level.css_class().to_string(),
        }
    }

    /// Orders activities by severity rank without touching the report
    ///
    /// The sort is stable, so equal ranks keep their report order, and
    /// unrecognized severities land after every known one.
    pub fn build_timeline(report: &AnalysisReport) -> Vec<TimelineEntryView> {
        let mut entries: Vec<TimelineEntryView> = report
            .activities()
            .iter()
            .map(|activity| {
                let kind = activity.kind.clone().unwrap_or_default();
                let severity = Severity::classify(activity.severity.as_deref());
                let severity_text = activity
                    .severity
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(severity.as_str())
                    .to_string();

                TimelineEntryView {
                    label: humanize_activity_type(&kind),
                    kind,
                    severity,
                    severity_text,
                    description: activity.description.clone().unwrap_or_default(),
                    module: non_empty(activity.module.as_deref()),
                    function: non_empty(activity.function.as_deref()),
                }
            })
            .collect();

        entries.sort_by_key(|entry| entry.severity.rank());
        entries
    }

    pub fn build_metrics(report: &AnalysisReport) -> MetricsView {
        let execution = report.execution.as_ref();
        let activities = report.activities();

        let mut severity_breakdown = SeverityBreakdownView::default();
        for activity in activities {
            match Severity::classify(activity.severity.as_deref()) {
                Severity::High => severity_breakdown.high += 1,
                Severity::Medium => severity_breakdown.medium += 1,
                Severity::Low => severity_breakdown.low += 1,
                Severity::Unknown => severity_breakdown.unknown += 1,
            }
        }

        MetricsView {
            execution_time_seconds: execution
                .and_then(|e| non_negative(e.execution_time))
                .unwrap_or(0.0),
            activity_count: activities.len(),
            imported_module_count: report.imported_modules().len(),
            total_time_seconds: execution.and_then(|e| non_negative(e.total_time)),
            succeeded: execution.and_then(|e| e.success),
            timed_out: execution.and_then(|e| e.timed_out).unwrap_or(false),
            severity_breakdown,
        }
    }

    /// Substitutes placeholders for empty or absent stdout/stderr
    pub fn build_outputs(report: &AnalysisReport) -> OutputsView {
        let results = report.sandbox_results.as_ref();
        let pick = |stream: Option<&String>, placeholder: &str| {
            stream
                .filter(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| placeholder.to_string())
        };

        OutputsView {
            stdout: pick(results.and_then(|r| r.stdout.as_ref()), NO_OUTPUT_PLACEHOLDER),
            stderr: pick(results.and_then(|r| r.stderr.as_ref()), NO_ERRORS_PLACEHOLDER),
        }
    }

    pub fn build_recommendations(report: &AnalysisReport) -> Vec<RecommendationView> {
        report
            .recommendations
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|rec| RecommendationView {
                title: rec.title.clone().unwrap_or_default(),
                description: rec.description.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// Produces one `(timestamps, values)` series per monitor stream
    pub fn build_charts(&self, report: &AnalysisReport) -> Vec<ChartSeriesView> {
        let monitoring = report.monitoring.as_ref();

        MetricStream::ALL
            .into_iter()
            .map(|stream| {
                let samples = monitoring
                    .and_then(|m| match stream {
                        MetricStream::Cpu => m.cpu.as_deref(),
                        MetricStream::Memory => m.memory.as_deref(),
                        MetricStream::NetworkSent | MetricStream::NetworkReceived => {
                            m.network.as_deref()
                        }
                        MetricStream::Processes => m.processes.as_deref(),
                    })
                    .unwrap_or(&[]);
                self.build_series(stream, samples)
            })
            .collect()
    }

    fn build_series(&self, stream: MetricStream, samples: &[MetricSample]) -> ChartSeriesView {
        let sampled = self.options.sampler.sample(samples);

        let timestamps = sampled
            .iter()
            .map(|sample| match sample.timestamp {
                Some(ts) => self.options.time_zone.format_epoch(ts),
                None => MISSING_TIMESTAMP_LABEL.to_string(),
            })
            .collect();

        let values = sampled
            .iter()
            .map(|sample| match stream {
                MetricStream::Cpu | MetricStream::Memory => sample.percent,
                MetricStream::NetworkSent => sample.bytes_sent_delta,
                MetricStream::NetworkReceived => sample.bytes_recv_delta,
                MetricStream::Processes => sample.count,
            })
            .collect();

        ChartSeriesView {
            stream,
            label: stream.label().to_string(),
            timestamps,
            values,
        }
    }
}

/// Rounds and clamps a raw score into `0..=100`; missing scores are 0
fn clamp_score(raw: Option<f64>) -> u8 {
    raw.filter(|s| s.is_finite())
        .map(|s| s.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
