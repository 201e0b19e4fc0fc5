/// Chart plotting adapters
mod chartjs_plotter;

pub use chartjs_plotter::{ChartJsPlotter, CHART_JS_CDN};
