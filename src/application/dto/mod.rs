/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into use cases, keeping the domain
/// layer isolated from argument parsing.
mod output_format;
mod requests;

pub use output_format::OutputFormat;
pub use requests::{HistoryRequest, RenderRequest};
