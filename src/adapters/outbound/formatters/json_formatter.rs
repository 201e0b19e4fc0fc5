use crate::application::read_models::{DashboardView, HistoryView};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;

/// JsonFormatter adapter exposing the view model itself
///
/// Emits the same data the HTML dashboard is rendered from, for use by other
/// front ends. The output is pretty-printed and newline-terminated.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for JsonFormatter {
    fn format(&self, view: &DashboardView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(view)?;
        json.push('\n');
        Ok(json)
    }

    fn format_history(&self, history: &HistoryView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(history)?;
        json.push('\n');
        Ok(json)
    }
}
