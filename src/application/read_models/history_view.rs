//! History index view

use crate::analysis_report::domain::RiskLevel;
use serde::Serialize;

/// Past executions, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub entries: Vec<HistoryEntryView>,
    /// Files in the directory that could not be parsed as reports
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryView {
    /// File the report was loaded from
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub level_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
