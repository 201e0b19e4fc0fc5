/// Use cases module containing application orchestration
mod build_history;
mod render_report;

pub use build_history::BuildHistoryUseCase;
pub use render_report::RenderReportUseCase;
