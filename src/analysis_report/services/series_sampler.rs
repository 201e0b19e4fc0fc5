/// Default cap on samples per chart series
pub const DEFAULT_MAX_SERIES_POINTS: usize = 50;

/// Reduces long monitor series to a bounded number of chart points
///
/// Uses stride sampling: with `len > max`, every `len / max`-th sample is
/// kept, truncated to `max`. Shorter series pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSampler {
    max_points: usize,
}

impl SeriesSampler {
    /// A `max_points` of zero disables sampling
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn sample<'a, T>(&self, series: &'a [T]) -> Vec<&'a T> {
        if self.max_points == 0 || series.len() <= self.max_points {
            return series.iter().collect();
        }

        let step = series.len() / self.max_points;
        series
            .iter()
            .step_by(step)
            .take(self.max_points)
            .collect()
    }
}

impl Default for SeriesSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SERIES_POINTS)
    }
}
