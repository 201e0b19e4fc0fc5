//! Chart series view

use serde::Serialize;

/// Monitor streams that get plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricStream {
    Cpu,
    Memory,
    NetworkSent,
    NetworkReceived,
    Processes,
}

impl MetricStream {
    pub const ALL: [MetricStream; 5] = [
        MetricStream::Cpu,
        MetricStream::Memory,
        MetricStream::NetworkSent,
        MetricStream::NetworkReceived,
        MetricStream::Processes,
    ];

    /// Chart container the stream is drawn into; both network streams share one
    pub fn container_id(self) -> &'static str {
        match self {
            MetricStream::Cpu => "cpuChart",
            MetricStream::Memory => "memoryChart",
            MetricStream::NetworkSent | MetricStream::NetworkReceived => "networkChart",
            MetricStream::Processes => "processChart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricStream::Cpu => "CPU Usage (%)",
            MetricStream::Memory => "Memory Usage (%)",
            MetricStream::NetworkSent => "Bytes Sent",
            MetricStream::NetworkReceived => "Bytes Received",
            MetricStream::Processes => "Process Count",
        }
    }
}

/// `(timestamps, values)` pairs for one stream
///
/// A `None` value is a sample that lacked the field; charts draw it as a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesView {
    pub stream: MetricStream,
    pub label: String,
    pub timestamps: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSeriesView {
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
