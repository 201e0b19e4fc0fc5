/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: report files on disk,
/// stderr feedback, output formats, and the Chart.js widget.
pub mod outbound;
