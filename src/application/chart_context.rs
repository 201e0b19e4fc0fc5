//! Chart lifecycle for one rendered dashboard
//!
//! A [`ChartContext`] owns the plotter and every handle it issued. It is
//! created when a view model is loaded and disposes its charts when the
//! dashboard goes away, so no chart state outlives the page that drew it.

use crate::application::read_models::{ChartSeriesView, MetricStream};
use crate::ports::outbound::{ChartHandle, ChartPlotter, StyleHints};
use crate::shared::Result;

/// Owns a plotter and the handles of the series plotted through it
pub struct ChartContext<P: ChartPlotter> {
    plotter: P,
    handles: Vec<(MetricStream, ChartHandle)>,
}

impl<P: ChartPlotter> ChartContext<P> {
    /// Plots every series of the view model
    ///
    /// # Errors
    /// Returns the first plotting error; series plotted before it are
    /// disposed when the partially built context is dropped.
    pub fn create_on_load(plotter: P, charts: &[ChartSeriesView]) -> Result<Self> {
        let mut context = Self {
            plotter,
            handles: Vec::with_capacity(charts.len()),
        };

        for series in charts {
            let handle = context.plotter.plot_series(
                series.stream.container_id(),
                &series.label,
                &series.timestamps,
                &series.values,
                &style_for(series.stream),
            )?;
            context.handles.push((series.stream, handle));
        }

        Ok(context)
    }

    pub fn handle(&self, stream: MetricStream) -> Option<ChartHandle> {
        self.handles
            .iter()
            .find(|(s, _)| *s == stream)
            .map(|(_, handle)| *handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn plotter(&self) -> &P {
        &self.plotter
    }

    /// Disposes every live chart; calling it again is a no-op
    pub fn dispose_all(&mut self) {
        for (_, handle) in self.handles.drain(..) {
            self.plotter.dispose(handle);
        }
    }
}

impl<P: ChartPlotter> Drop for ChartContext<P> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

/// Colors and axes per stream, matching the dashboard palette
pub fn style_for(stream: MetricStream) -> StyleHints {
    match stream {
        MetricStream::Cpu => StyleHints {
            border_color: "#dc3545",
            background_color: "rgba(220, 53, 69, 0.1)",
            fill: true,
            y_max: Some(100.0),
            axis_title: "CPU Usage (%)",
        },
        MetricStream::Memory => StyleHints {
            border_color: "#fd7e14",
            background_color: "rgba(253, 126, 20, 0.1)",
            fill: true,
            y_max: Some(100.0),
            axis_title: "Memory Usage (%)",
        },
        MetricStream::NetworkSent => StyleHints {
            border_color: "#0dcaf0",
            background_color: "rgba(13, 202, 240, 0.1)",
            fill: false,
            y_max: None,
            axis_title: "Bytes",
        },
        MetricStream::NetworkReceived => StyleHints {
            border_color: "#6610f2",
            background_color: "rgba(102, 16, 242, 0.1)",
            fill: false,
            y_max: None,
            axis_title: "Bytes",
        },
        MetricStream::Processes => StyleHints {
            border_color: "#198754",
            background_color: "rgba(25, 135, 84, 0.1)",
            fill: true,
            y_max: None,
            axis_title: "Processes",
        },
    }
}
