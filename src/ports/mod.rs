/// Ports layer - Interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which the
/// application core reaches archives, dependency sources and the console.
pub mod outbound;
