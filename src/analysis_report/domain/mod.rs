pub mod lenient;
pub mod report;
pub mod severity;

pub use report::{
    Activity, AnalysisReport, ExecutionInfo, MetricSample, Monitoring, Recommendation,
    SandboxResults,
};
pub use severity::{RiskLevel, Severity};
