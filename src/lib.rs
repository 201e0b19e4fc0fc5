//! snakecage-report - dashboards for SnakeCage sandbox analysis reports
//!
//! This library turns analysis report JSON produced by the sandbox backend
//! into a presentation-ready view model and renders it as a self-contained
//! HTML dashboard, a Markdown document, or the view model as JSON. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`analysis_report`): Untrusted report model, severity
//!   classification, label humanizing, series down-sampling
//! - **Application Layer** (`application`): View model builder, chart context,
//!   use cases and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use snakecage_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = RenderReportUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = RenderRequest::new(PathBuf::from("report.json"), ViewModelOptions::default());
//! let view = use_case.execute(request)?;
//!
//! // Format output
//! let output = HtmlFormatter::new().format(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analysis_report;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::charts::ChartJsPlotter;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::analysis_report::domain::{AnalysisReport, RiskLevel, Severity};
    pub use crate::analysis_report::services::{humanize_activity_type, SeriesSampler};
    pub use crate::application::chart_context::ChartContext;
    pub use crate::application::dto::{HistoryRequest, OutputFormat, RenderRequest};
    pub use crate::application::read_models::{
        DashboardView, HistoryView, RenderedViewModel, ReportViewModelBuilder, ViewModelOptions,
    };
    pub use crate::application::use_cases::{BuildHistoryUseCase, RenderReportUseCase};
    pub use crate::ports::outbound::{
        ChartPlotter, DashboardFormatter, OutputPresenter, ProgressReporter, ReportReader,
    };
    pub use crate::shared::Result;
}
