use crate::adapters::outbound::charts::{ChartJsPlotter, CHART_JS_CDN};
use crate::application::chart_context::ChartContext;
use crate::application::read_models::{
    DashboardView, HistoryView, MetricStream, MetricsView, OutputsView, RecommendationView,
    RenderedViewModel, ReportHeaderView, RiskSummaryView, TimelineEntryView,
};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;

const STYLE: &str = ":root{--bg:#f5f6f8;--fg:#212529;--muted:#6c757d;--card:#ffffff;--border:#dee2e6}\
body{margin:0;background:var(--bg);color:var(--fg);font-family:system-ui,-apple-system,Segoe UI,Arial,sans-serif}\
.container{max-width:1200px;margin:0 auto;padding:24px}\
.header h1{margin:0 0 4px 0;font-size:24px}.sub{color:var(--muted);font-size:13px}\
.grid{display:grid;grid-template-columns:repeat(4,minmax(0,1fr));gap:12px;margin-top:16px}\
.card{background:var(--card);border:1px solid var(--border);border-radius:8px;padding:14px}\
.card h2,.card h4{margin:0}.card p{margin:4px 0 0 0;color:var(--muted)}\
.section{margin-top:20px}.section h3{margin:0 0 10px 0;font-size:17px}\
.charts{display:grid;grid-template-columns:repeat(2,minmax(0,1fr));gap:12px}\
.chart{position:relative;height:240px}\
.timeline-item{border-left:3px solid var(--border);padding:6px 12px;margin-bottom:10px}\
.timeline-item h5{display:inline;margin:0 0 0 6px;font-size:15px}\
.timeline-item small{display:block;color:var(--muted)}\
.badge{display:inline-block;padding:2px 8px;border-radius:4px;font-size:12px;font-weight:600;color:#fff}\
.severity-high{background:#dc3545}.severity-medium{background:#fd7e14}.severity-low{background:#0d6efd}.severity-unknown{background:#6c757d}\
.risk-high{color:#dc3545}.risk-medium{color:#fd7e14}.risk-low{color:#198754}.risk-unknown{color:#6c757d}\
pre{background:#f1f3f5;border:1px solid var(--border);border-radius:6px;padding:10px;white-space:pre-wrap;max-height:320px;overflow:auto}\
.outputs{display:grid;grid-template-columns:repeat(2,minmax(0,1fr));gap:12px}\
.alert{background:#cff4fc;border:1px solid #9eeaf9;border-radius:6px;padding:10px}\
.alert-warning{background:#fff3cd;border-color:#ffe69c}\
table{width:100%;border-collapse:collapse;background:var(--card)}\
th,td{text-align:left;padding:8px;border-bottom:1px solid var(--border)}\
@media (max-width:900px){.grid{grid-template-columns:repeat(2,minmax(0,1fr))}.charts,.outputs{grid-template-columns:1fr}}";

/// HtmlFormatter adapter for generating a self-contained dashboard page
///
/// Every piece of report text is escaped before it reaches the page. Charts
/// are drawn through a [`ChartContext`] over a [`ChartJsPlotter`], whose
/// bootstrap script keeps chart instances out of the global scope.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn open_page(output: &mut String, title: &str, with_charts: bool) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        output.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        output.push_str(&format!("<style>{}</style>\n", STYLE));
        if with_charts {
            output.push_str(&format!("<script src=\"{}\"></script>\n", CHART_JS_CDN));
        }
        output.push_str("</head>\n<body>\n<div class=\"container\">\n");
    }

    fn close_page(output: &mut String, script: Option<&str>) {
        output.push_str("</div>\n");
        if let Some(script) = script {
            output.push_str(&format!("<script>\n{}\n</script>\n", script));
        }
        output.push_str("</body>\n</html>\n");
    }

    fn render_header(output: &mut String, header: &ReportHeaderView) {
        output.push_str("<div class=\"header\">\n<h1>SnakeCage Analysis Report</h1>\n");
        let mut details = Vec::new();
        if let Some(id) = &header.execution_id {
            details.push(format!("Execution {}", html_escape(id)));
        }
        if let Some(timestamp) = &header.timestamp {
            details.push(html_escape(timestamp));
        }
        if !details.is_empty() {
            output.push_str(&format!("<div class=\"sub\">{}</div>\n", details.join(" · ")));
        }
        if let Some(summary) = &header.summary {
            output.push_str(&format!("<p>{}</p>\n", html_escape(summary)));
        }
        output.push_str("</div>\n");
    }

    fn render_summary_cards(output: &mut String, risk: &RiskSummaryView, metrics: &MetricsView) {
        let level_class = html_escape(&risk.level_class);
        output.push_str("<div class=\"grid\">\n");
        output.push_str(&format!(
            "<div class=\"card\" id=\"riskScore\"><h2 class=\"{}\">{}/100</h2><p>Risk Level: <span class=\"{}\">{}</span></p></div>\n",
            level_class,
            risk.score,
            level_class,
            risk.level.as_str().to_uppercase()
        ));
        output.push_str(&format!(
            "<div class=\"card\" id=\"executionTime\"><h4>{:.2}s</h4><p>Execution Time</p></div>\n",
            metrics.execution_time_seconds
        ));
        output.push_str(&format!(
            "<div class=\"card\" id=\"activitiesCount\"><h4>{}</h4><p>Suspicious Activities</p></div>\n",
            metrics.activity_count
        ));
        output.push_str(&format!(
            "<div class=\"card\" id=\"modulesCount\"><h4>{}</h4><p>Imported Modules</p></div>\n",
            metrics.imported_module_count
        ));
        output.push_str("</div>\n");

        let breakdown = metrics.severity_breakdown;
        let mut status = vec![format!(
            "High {} · Medium {} · Low {} · Unknown {}",
            breakdown.high, breakdown.medium, breakdown.low, breakdown.unknown
        )];
        if let Some(succeeded) = metrics.succeeded {
            status.push(if succeeded { "Completed" } else { "Failed" }.to_string());
        }
        if metrics.timed_out {
            status.push("Timed out".to_string());
        }
        if let Some(total) = metrics.total_time_seconds {
            status.push(format!("Total {:.2}s", total));
        }
        output.push_str(&format!("<div class=\"sub section\">{}</div>\n", status.join(" | ")));
    }

    fn render_charts(output: &mut String) {
        output.push_str("<div class=\"section\">\n<h3>Resource Monitoring</h3>\n<div class=\"charts\">\n");
        let mut seen: Vec<&str> = Vec::new();
        for stream in MetricStream::ALL {
            let container = stream.container_id();
            if seen.contains(&container) {
                continue;
            }
            seen.push(container);
            output.push_str(&format!(
                "<div class=\"card chart\"><canvas id=\"{}\"></canvas></div>\n",
                container
            ));
        }
        output.push_str("</div>\n</div>\n");
    }

    fn render_timeline(output: &mut String, timeline: &[TimelineEntryView]) {
        output.push_str("<div class=\"section\" id=\"activityTimeline\">\n<h3>Activity Timeline</h3>\n");
        if timeline.is_empty() {
            output.push_str("<div class=\"alert\">No suspicious activities detected</div>\n");
        }
        for entry in timeline {
            output.push_str("<div class=\"timeline-item\">\n");
            output.push_str(&format!(
                "<span class=\"badge {}\">{}</span><h5>{}</h5>\n",
                entry.severity.css_class(),
                html_escape(&entry.severity_text.to_uppercase()),
                html_escape(&entry.label)
            ));
            output.push_str(&format!("<p>{}</p>\n", html_escape(&entry.description)));
            if let Some(module) = &entry.module {
                output.push_str(&format!("<small>Module: {}</small>\n", html_escape(module)));
            }
            if let Some(function) = &entry.function {
                output.push_str(&format!("<small>Function: {}</small>\n", html_escape(function)));
            }
            output.push_str("</div>\n");
        }
        output.push_str("</div>\n");
    }

    fn render_outputs(output: &mut String, outputs: &OutputsView) {
        output.push_str("<div class=\"section outputs\">\n");
        output.push_str(&format!(
            "<div><h3>Standard Output</h3><pre id=\"stdoutOutput\">{}</pre></div>\n",
            html_escape(&outputs.stdout)
        ));
        output.push_str(&format!(
            "<div><h3>Standard Error</h3><pre id=\"stderrOutput\">{}</pre></div>\n",
            html_escape(&outputs.stderr)
        ));
        output.push_str("</div>\n");
    }

    fn render_recommendations(output: &mut String, recommendations: &[RecommendationView]) {
        output.push_str("<div class=\"section\" id=\"recommendations\">\n<h3>Recommendations</h3>\n");
        for rec in recommendations {
            output.push_str(&format!(
                "<div class=\"card section\"><h4>{}</h4><p>{}</p></div>\n",
                html_escape(&rec.title),
                html_escape(&rec.description)
            ));
        }
        output.push_str("</div>\n");
    }

    fn render_dashboard(model: &RenderedViewModel) -> Result<String> {
        let context = ChartContext::create_on_load(ChartJsPlotter::new(), &model.charts)?;
        let script = context.plotter().render_script()?;

        let mut output = String::new();
        Self::open_page(&mut output, "SnakeCage Analysis Report", true);
        Self::render_header(&mut output, &model.header);
        Self::render_summary_cards(&mut output, &model.risk_summary, &model.metrics);
        Self::render_charts(&mut output);
        Self::render_timeline(&mut output, &model.timeline);
        Self::render_outputs(&mut output, &model.outputs);
        Self::render_recommendations(&mut output, &model.recommendations);
        Self::close_page(&mut output, Some(&script));
        Ok(output)
    }

    fn render_empty_state(reason: &str) -> String {
        let mut output = String::new();
        Self::open_page(&mut output, "SnakeCage Analysis Report", false);
        output.push_str("<div class=\"header\"><h1>SnakeCage Analysis Report</h1></div>\n");
        output.push_str(&format!(
            "<div class=\"alert alert-warning section\">Report unavailable: {}</div>\n",
            html_escape(reason)
        ));
        Self::close_page(&mut output, None);
        output
    }
}

impl DashboardFormatter for HtmlFormatter {
    fn format(&self, view: &DashboardView) -> Result<String> {
        match view {
            DashboardView::Ready(model) => Self::render_dashboard(model),
            DashboardView::Unavailable { reason } => Ok(Self::render_empty_state(reason)),
        }
    }

    fn format_history(&self, history: &HistoryView) -> Result<String> {
        let mut output = String::new();
        Self::open_page(&mut output, "SnakeCage Execution History", false);
        output.push_str("<div class=\"header\"><h1>Execution History</h1>\n");
        output.push_str(&format!(
            "<div class=\"sub\">{} reports, {} skipped</div></div>\n",
            history.entries.len(),
            history.skipped
        ));

        if history.entries.is_empty() {
            output.push_str("<div class=\"alert section\">No reports found</div>\n");
        } else {
            output.push_str("<div class=\"section\"><table>\n<thead><tr><th>Timestamp</th><th>Execution</th><th>Risk</th><th>Summary</th><th>Source</th></tr></thead>\n<tbody>\n");
            for entry in &history.entries {
                output.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td class=\"{}\">{}/100 {}</td><td>{}</td><td>{}</td></tr>\n",
                    html_escape(entry.timestamp.as_deref().unwrap_or("-")),
                    html_escape(entry.execution_id.as_deref().unwrap_or("-")),
                    html_escape(&entry.level_class),
                    entry.risk_score,
                    entry.risk_level.as_str().to_uppercase(),
                    html_escape(entry.summary.as_deref().unwrap_or("")),
                    html_escape(&entry.source)
                ));
            }
            output.push_str("</tbody>\n</table></div>\n");
        }

        Self::close_page(&mut output, None);
        Ok(output)
    }
}

/// Escapes HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
