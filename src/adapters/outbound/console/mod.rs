/// Console adapters for stderr feedback
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
