use crate::analysis_report::domain::Severity;
use crate::application::read_models::{
    DashboardView, HistoryView, MetricsView, RecommendationView, RenderedViewModel,
    ReportHeaderView, RiskSummaryView, TimelineEntryView,
};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;

/// Markdown table header for the activity timeline
const TIMELINE_TABLE_HEADER: &str = "| Severity | Activity | Description | Module | Function |\n";

/// Markdown table separator line for the activity timeline
const TIMELINE_TABLE_SEPARATOR: &str =
    "|----------|----------|-------------|--------|----------|\n";

/// Markdown table header for the history index
const HISTORY_TABLE_HEADER: &str = "| Timestamp | Execution | Risk | Level | Summary | Source |\n";

/// Markdown table separator line for the history index
const HISTORY_TABLE_SEPARATOR: &str =
    "|-----------|-----------|------|-------|---------|--------|\n";

/// MarkdownFormatter adapter for generating a Markdown analysis report
///
/// Charts are summarized as point counts; everything else mirrors the
/// HTML dashboard.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipes, newlines and angle brackets for safe table cells
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\n', '\r'], " ")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Fences captured output, lengthening the fence past any backtick run inside
    fn fenced_block(text: &str) -> String {
        let mut longest = 0;
        let mut current = 0;
        for c in text.chars() {
            if c == '`' {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        let fence = "`".repeat(longest.max(2) + 1);
        format!("{}text\n{}\n{}\n", fence, text, fence)
    }

    fn severity_emoji(entry: &TimelineEntryView) -> &'static str {
        match entry.severity {
            Severity::High => "🔴",
            Severity::Medium => "🟠",
            Severity::Low => "🟢",
            Severity::Unknown => "⚪",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, header: &ReportHeaderView) {
        output.push_str("# SnakeCage Analysis Report\n\n");
        if let Some(id) = &header.execution_id {
            output.push_str(&format!(
                "- **Execution:** {}\n",
                Self::escape_markdown_table_cell(id)
            ));
        }
        if let Some(timestamp) = &header.timestamp {
            output.push_str(&format!(
                "- **Timestamp:** {}\n",
                Self::escape_markdown_table_cell(timestamp)
            ));
        }
        if let Some(summary) = &header.summary {
            output.push_str(&format!(
                "- **Summary:** {}\n",
                Self::escape_markdown_table_cell(summary)
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, risk: &RiskSummaryView, metrics: &MetricsView) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Risk Score:** {}/100 ({})\n\n",
            risk.score,
            risk.level.as_str().to_uppercase()
        ));
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!(
            "| Execution Time | {:.2}s |\n",
            metrics.execution_time_seconds
        ));
        if let Some(total) = metrics.total_time_seconds {
            output.push_str(&format!("| Total Time | {:.2}s |\n", total));
        }
        if let Some(succeeded) = metrics.succeeded {
            output.push_str(&format!(
                "| Completed | {} |\n",
                if succeeded { "yes" } else { "no" }
            ));
        }
        output.push_str(&format!(
            "| Timed Out | {} |\n",
            if metrics.timed_out { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "| Suspicious Activities | {} |\n",
            metrics.activity_count
        ));
        output.push_str(&format!(
            "| Imported Modules | {} |\n",
            metrics.imported_module_count
        ));
        let breakdown = metrics.severity_breakdown;
        output.push_str(&format!(
            "| Severity Breakdown | high {} / medium {} / low {} / unknown {} |\n\n",
            breakdown.high, breakdown.medium, breakdown.low, breakdown.unknown
        ));
    }

    fn render_timeline(&self, output: &mut String, timeline: &[TimelineEntryView]) {
        output.push_str("## Activity Timeline\n\n");
        if timeline.is_empty() {
            output.push_str("No suspicious activities detected.\n\n");
            return;
        }

        output.push_str(TIMELINE_TABLE_HEADER);
        output.push_str(TIMELINE_TABLE_SEPARATOR);
        for entry in timeline {
            output.push_str(&format!(
                "| {} {} | {} | {} | {} | {} |\n",
                Self::severity_emoji(entry),
                Self::escape_markdown_table_cell(&entry.severity_text.to_uppercase()),
                Self::escape_markdown_table_cell(&entry.label),
                Self::escape_markdown_table_cell(&entry.description),
                Self::escape_markdown_table_cell(entry.module.as_deref().unwrap_or("")),
                Self::escape_markdown_table_cell(entry.function.as_deref().unwrap_or("")),
            ));
        }
        output.push('\n');
    }

    fn render_monitoring(&self, output: &mut String, model: &RenderedViewModel) {
        output.push_str("## Resource Monitoring\n\n");
        output.push_str("| Series | Points |\n|--------|--------|\n");
        for series in &model.charts {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&series.label),
                series.values.len()
            ));
        }
        output.push('\n');
    }

    fn render_outputs(&self, output: &mut String, model: &RenderedViewModel) {
        output.push_str("## Standard Output\n\n");
        output.push_str(&Self::fenced_block(&model.outputs.stdout));
        output.push_str("\n## Standard Error\n\n");
        output.push_str(&Self::fenced_block(&model.outputs.stderr));
        output.push('\n');
    }

    fn render_recommendations(&self, output: &mut String, recommendations: &[RecommendationView]) {
        output.push_str("## Recommendations\n\n");
        for rec in recommendations {
            output.push_str(&format!(
                "- **{}**: {}\n",
                Self::escape_markdown_table_cell(&rec.title),
                Self::escape_markdown_table_cell(&rec.description)
            ));
        }
        output.push('\n');
    }
}

impl DashboardFormatter for MarkdownFormatter {
    fn format(&self, view: &DashboardView) -> Result<String> {
        let mut output = String::new();

        let model = match view {
            DashboardView::Ready(model) => model,
            DashboardView::Unavailable { reason } => {
                output.push_str("# SnakeCage Analysis Report\n\n");
                output.push_str(&format!(
                    "> ⚠️ Report unavailable: {}\n",
                    Self::escape_markdown_table_cell(reason)
                ));
                return Ok(output);
            }
        };

        self.render_header(&mut output, &model.header);
        self.render_summary(&mut output, &model.risk_summary, &model.metrics);
        self.render_timeline(&mut output, &model.timeline);
        self.render_monitoring(&mut output, model);
        self.render_outputs(&mut output, model);
        self.render_recommendations(&mut output, &model.recommendations);

        Ok(output)
    }

    fn format_history(&self, history: &HistoryView) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Execution History\n\n");
        output.push_str(&format!(
            "{} {}, {} skipped.\n\n",
            history.entries.len(),
            if history.entries.len() == 1 {
                "report"
            } else {
                "reports"
            },
            history.skipped
        ));

        if history.entries.is_empty() {
            return Ok(output);
        }

        output.push_str(HISTORY_TABLE_HEADER);
        output.push_str(HISTORY_TABLE_SEPARATOR);
        for entry in &history.entries {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(entry.timestamp.as_deref().unwrap_or("-")),
                Self::escape_markdown_table_cell(entry.execution_id.as_deref().unwrap_or("-")),
                entry.risk_score,
                entry.risk_level.as_str(),
                Self::escape_markdown_table_cell(entry.summary.as_deref().unwrap_or("")),
                Self::escape_markdown_table_cell(&entry.source),
            ));
        }
        Ok(output)
    }
}
