/// Application layer - Use cases, read models and DTOs
///
/// This layer turns parsed reports into view models and coordinates with
/// infrastructure through ports.
pub mod chart_context;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
