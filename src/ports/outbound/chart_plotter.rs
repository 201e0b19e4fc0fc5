use crate::shared::Result;

/// Opaque reference to a plotted series, issued by a [`ChartPlotter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub usize);

/// Visual hints passed through to the charting widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleHints {
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
    /// Fixed upper bound for the y axis (percent charts use 100)
    pub y_max: Option<f64>,
    pub axis_title: &'static str,
}

/// ChartPlotter port for the charting capability
///
/// Each call plots one metric stream into a container; streams sharing a
/// container are drawn on the same chart.
pub trait ChartPlotter {
    /// Plots one series and returns a handle for later disposal
    ///
    /// # Errors
    /// Returns an error if `timestamps` and `values` differ in length or the
    /// series cannot be encoded for the widget
    fn plot_series(
        &mut self,
        container_id: &str,
        series_label: &str,
        timestamps: &[String],
        values: &[Option<f64>],
        style: &StyleHints,
    ) -> Result<ChartHandle>;

    /// Releases a previously plotted series; unknown handles are ignored
    fn dispose(&mut self, handle: ChartHandle);
}
