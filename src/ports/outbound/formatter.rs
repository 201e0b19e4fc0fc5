use crate::application::read_models::{DashboardView, HistoryView};
use crate::shared::Result;

/// DashboardFormatter port for rendering view models
///
/// Implementations receive plain view data and own all escaping for their
/// output format; report text is never trusted to be markup-free.
pub trait DashboardFormatter {
    /// Renders a single report dashboard, or its empty state
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &DashboardView) -> Result<String>;

    /// Renders the history index
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_history(&self, history: &HistoryView) -> Result<String>;
}
