use crate::adapters::outbound::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DashboardFormatter;

/// Factory for creating dashboard formatters
///
/// Keeps the choice of formatter adapter in the application layer, so the
/// CLI only deals in [`OutputFormat`] values.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use snakecage_report::application::dto::OutputFormat;
    /// use snakecage_report::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DashboardFormatter> {
        match format {
            OutputFormat::Html => Box::new(HtmlFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use snakecage_report::application::dto::OutputFormat;
    /// use snakecage_report::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Rendering HTML dashboard...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Rendering HTML dashboard...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
            OutputFormat::Json => "📝 Serializing view model as JSON...",
        }
    }
}
