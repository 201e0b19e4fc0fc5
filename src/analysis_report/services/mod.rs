pub mod label_humanizer;
pub mod series_sampler;

pub use label_humanizer::humanize_activity_type;
pub use series_sampler::{SeriesSampler, DEFAULT_MAX_SERIES_POINTS};
