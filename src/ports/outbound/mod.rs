/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, chart widgets).
pub mod chart_plotter;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_reader;

pub use chart_plotter::{ChartHandle, ChartPlotter, StyleHints};
pub use formatter::DashboardFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_reader::ReportReader;
