use super::lenient;
use crate::shared::error::ReportError;
use serde::Deserialize;
use serde_json::Value;

/// Analysis report for one sandboxed execution
///
/// Every field is optional: the document is untrusted and may be partial.
/// Fields of the wrong JSON type decode as `None` (see [`lenient`]); only a
/// document that is not a JSON object at all is rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub execution_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub summary: Option<String>,
    /// Integer 0-100 in well-formed reports; floats are accepted and rounded later
    #[serde(default, deserialize_with = "lenient::optional")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub execution: Option<ExecutionInfo>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub monitoring: Option<Monitoring>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub suspicious_activities: Option<Vec<Activity>>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub sandbox_results: Option<SandboxResults>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub recommendations: Option<Vec<Recommendation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExecutionInfo {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub timed_out: Option<bool>,
    /// Seconds spent running the submitted code
    #[serde(default, deserialize_with = "lenient::optional")]
    pub execution_time: Option<f64>,
    /// Seconds including sandbox setup and teardown
    #[serde(default, deserialize_with = "lenient::optional")]
    pub total_time: Option<f64>,
}

/// Time series captured by the system monitor while the code ran
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Monitoring {
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub cpu: Option<Vec<MetricSample>>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub memory: Option<Vec<MetricSample>>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub network: Option<Vec<MetricSample>>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub processes: Option<Vec<MetricSample>>,
}

/// One monitor sample; which value fields are set depends on the stream
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetricSample {
    /// Epoch seconds
    #[serde(default, deserialize_with = "lenient::optional")]
    pub timestamp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub bytes_sent_delta: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub bytes_recv_delta: Option<f64>,
    /// Process count (processes stream only)
    #[serde(default, deserialize_with = "lenient::optional")]
    pub count: Option<f64>,
}

/// A single suspicious behavior detected during execution
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    /// snake_case activity type, e.g. `network_activity`
    #[serde(rename = "type", default, deserialize_with = "lenient::optional")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub function: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SandboxResults {
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub imported_modules: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub stdout: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub stderr: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,
}

impl AnalysisReport {
    /// Deserializes an embedded report payload
    ///
    /// # Errors
    /// Returns [`ReportError::ReportParse`] when the bytes are not UTF-8 JSON
    /// or the root value is not an object. Malformed optional fields never fail.
    pub fn parse(serialized: impl AsRef<[u8]>) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_slice(serialized.as_ref())
            .map_err(|e| ReportError::parse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Interprets an already decoded JSON value as a report
    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        if !value.is_object() {
            return Err(ReportError::parse(format!(
                "expected a JSON object at the report root, found {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ReportError::parse(e.to_string()))
    }

    /// Suspicious activities in report order, empty when absent
    pub fn activities(&self) -> &[Activity] {
        self.suspicious_activities.as_deref().unwrap_or(&[])
    }

    /// Imported modules, empty when absent
    pub fn imported_modules(&self) -> &[String] {
        self.sandbox_results
            .as_ref()
            .and_then(|s| s.imported_modules.as_deref())
            .unwrap_or(&[])
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_report() {
        let report = AnalysisReport::parse(
            r#"{
                "execution_id": "a1b2",
                "timestamp": "2024-05-01_10-00-00",
                "risk_score": 42,
                "risk_level": "medium",
                "execution": {"success": true, "timed_out": false, "execution_time": 1.25},
                "monitoring": {"cpu": [{"timestamp": 1714557600.5, "percent": 12.5}]},
                "suspicious_activities": [
                    {"type": "file_write", "severity": "low", "description": "wrote file", "module": "os"}
                ],
                "sandbox_results": {"imported_modules": ["os"], "stdout": "hi", "stderr": ""},
                "recommendations": [{"title": "Review", "description": "Look closer"}]
            }"#,
        )
        .unwrap();

        assert_eq!(report.execution_id.as_deref(), Some("a1b2"));
        assert_eq!(report.risk_score, Some(42.0));
        assert_eq!(report.risk_level.as_deref(), Some("medium"));
        assert_eq!(report.execution.as_ref().unwrap().execution_time, Some(1.25));
        assert_eq!(report.activities().len(), 1);
        assert_eq!(report.activities()[0].kind.as_deref(), Some("file_write"));
        assert_eq!(report.activities()[0].module.as_deref(), Some("os"));
        assert_eq!(report.imported_modules(), &["os".to_string()]);
        let cpu = report.monitoring.as_ref().unwrap().cpu.as_ref().unwrap();
        assert_eq!(cpu[0].percent, Some(12.5));
        assert_eq!(report.recommendations.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_empty_object() {
        let report = AnalysisReport::parse("{}").unwrap();
        assert_eq!(report, AnalysisReport::default());
        assert!(report.activities().is_empty());
        assert!(report.imported_modules().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = AnalysisReport::parse("{not json").unwrap_err();
        assert!(matches!(err, ReportError::ReportParse { .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = AnalysisReport::parse(b"{\"summary\": \"\xff\xfe\"}").unwrap_err();
        assert!(matches!(err, ReportError::ReportParse { .. }));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = AnalysisReport::parse("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("found an array"));

        let err = AnalysisReport::parse("null").unwrap_err();
        assert!(err.to_string().contains("found null"));
    }

    #[test]
    fn test_malformed_optional_fields_decode_as_absent() {
        let report = AnalysisReport::from_value(json!({
            "risk_score": "very high",
            "risk_level": 7,
            "execution": "fast",
            "monitoring": {"cpu": "none", "memory": [{"timestamp": "later", "percent": 5}]},
            "suspicious_activities": {"type": "oops"},
            "sandbox_results": {"imported_modules": ["os", 1], "stdout": 3},
            "recommendations": 5
        }))
        .unwrap();

        assert!(report.risk_score.is_none());
        assert!(report.risk_level.is_none());
        assert!(report.execution.is_none());
        let monitoring = report.monitoring.as_ref().unwrap();
        assert!(monitoring.cpu.is_none());
        let memory = monitoring.memory.as_ref().unwrap();
        assert_eq!(memory[0].timestamp, None);
        assert_eq!(memory[0].percent, Some(5.0));
        assert!(report.suspicious_activities.is_none());
        assert_eq!(report.imported_modules(), &["os".to_string()]);
        assert!(report.sandbox_results.as_ref().unwrap().stdout.is_none());
        assert!(report.recommendations.is_none());
    }

    #[test]
    fn test_activity_with_wrong_field_types_is_kept() {
        let report = AnalysisReport::from_value(json!({
            "suspicious_activities": [
                {"type": "network_activity", "severity": 3, "description": null, "module": 9},
                "not an activity"
            ]
        }))
        .unwrap();

        let activities = report.activities();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].kind.as_deref(), Some("network_activity"));
        assert!(activities[0].severity.is_none());
        assert!(activities[0].description.is_none());
        assert!(activities[0].module.is_none());
    }
}
