/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and reaches archives,
/// dependency sources and the console only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
