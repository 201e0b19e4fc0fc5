/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the driven interfaces the application core uses to
/// read reports, plot charts, format output, and talk to the console.
pub mod outbound;
