//! Timeline entry view

use crate::analysis_report::domain::Severity;
use serde::Serialize;

/// One suspicious activity, annotated for display
///
/// `module` and `function` are `None` when the report omits them or leaves
/// them empty, so renderers never emit blank "Module:" lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntryView {
    /// Raw snake_case type from the report
    #[serde(rename = "type")]
    pub kind: String,
    /// Humanized type, e.g. "Network Activity"
    pub label: String,
    pub severity: Severity,
    /// Severity as written in the report (opaque text)
    pub severity_text: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}
