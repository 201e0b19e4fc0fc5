use crate::ports::outbound::{ChartHandle, ChartPlotter, StyleHints};
use crate::shared::Result;
use serde_json::{json, Value};

/// Chart.js bundle the HTML dashboard loads
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

#[derive(Debug, Clone)]
struct PlottedSeries {
    handle: ChartHandle,
    container_id: String,
    label: String,
    timestamps: Vec<String>,
    values: Vec<Option<f64>>,
    style: StyleHints,
}

/// ChartJsPlotter adapter emitting Chart.js bootstrap code
///
/// Plotted series are held until [`ChartJsPlotter::render_script`] turns the
/// live ones into a single self-contained script. The script keeps chart
/// instances in a closure and destroys them on `pagehide`.
#[derive(Debug, Default)]
pub struct ChartJsPlotter {
    series: Vec<PlottedSeries>,
    next_handle: usize,
}

impl ChartJsPlotter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of series plotted and not yet disposed
    pub fn live_series(&self) -> usize {
        self.series.len()
    }

    /// Renders the bootstrap script body (without `<script>` tags)
    ///
    /// # Errors
    /// Returns an error if the chart configuration cannot be serialized
    pub fn render_script(&self) -> Result<String> {
        let charts: Vec<Value> = self
            .containers()
            .into_iter()
            .map(|container_id| {
                let members: Vec<&PlottedSeries> = self
                    .series
                    .iter()
                    .filter(|s| s.container_id == container_id)
                    .collect();
                json!({
                    "container": container_id,
                    "config": chart_config(&members),
                })
            })
            .collect();

        let payload = json_for_script(&Value::Array(charts))?;

        Ok(format!(
            r#"(function () {{
  const definitions = {payload};
  const charts = [];
  definitions.forEach(function (definition) {{
    const canvas = document.getElementById(definition.container);
    if (canvas && window.Chart) {{
      charts.push(new Chart(canvas.getContext('2d'), definition.config));
    }}
  }});
  window.addEventListener('pagehide', function () {{
    charts.forEach(function (chart) {{ chart.destroy(); }});
    charts.length = 0;
  }});
}})();"#
        ))
    }

    /// Container ids in first-plotted order
    fn containers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for series in &self.series {
            if !ids.contains(&series.container_id.as_str()) {
                ids.push(&series.container_id);
            }
        }
        ids
    }
}

impl ChartPlotter for ChartJsPlotter {
    fn plot_series(
        &mut self,
        container_id: &str,
        series_label: &str,
        timestamps: &[String],
        values: &[Option<f64>],
        style: &StyleHints,
    ) -> Result<ChartHandle> {
        if timestamps.len() != values.len() {
            anyhow::bail!(
                "Series '{}' has {} timestamps but {} values",
                series_label,
                timestamps.len(),
                values.len()
            );
        }

        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.series.push(PlottedSeries {
            handle,
            container_id: container_id.to_string(),
            label: series_label.to_string(),
            timestamps: timestamps.to_vec(),
            values: values.to_vec(),
            style: *style,
        });
        Ok(handle)
    }

    fn dispose(&mut self, handle: ChartHandle) {
        self.series.retain(|s| s.handle != handle);
    }
}

/// Line chart config for every series sharing one container
fn chart_config(members: &[&PlottedSeries]) -> Value {
    let labels = members
        .first()
        .map(|s| s.timestamps.clone())
        .unwrap_or_default();
    let first_style = members.first().map(|s| s.style);

    let datasets: Vec<Value> = members
        .iter()
        .map(|s| {
            json!({
                "label": s.label,
                "data": s.values,
                "borderColor": s.style.border_color,
                "backgroundColor": s.style.background_color,
                "borderWidth": 2,
                "tension": 0.1,
                "fill": s.style.fill,
                "spanGaps": false,
            })
        })
        .collect();

    let mut y_axis = json!({
        "beginAtZero": true,
        "title": {
            "display": true,
            "text": first_style.map(|s| s.axis_title).unwrap_or_default(),
        },
    });
    if let Some(max) = first_style.and_then(|s| s.y_max) {
        y_axis["max"] = json!(max);
    }

    json!({
        "type": "line",
        "data": { "labels": labels, "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": members.len() > 1 },
                "tooltip": { "mode": "index", "intersect": false },
            },
            "scales": { "y": y_axis },
        },
    })
}

/// Serializes JSON that is safe to inline in a `<script>` element
///
/// `<`, `>` and `&` are emitted as unicode escapes so report text can never
/// close the script element, and U+2028/U+2029 are escaped for older parsers.
fn json_for_script(value: &Value) -> Result<String> {
    let raw = serde_json::to_string(value)?;
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    Ok(escaped)
}
