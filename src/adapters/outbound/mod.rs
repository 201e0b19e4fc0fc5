/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod charts;
pub mod console;
pub mod filesystem;
pub mod formatters;
