/// Adapters layer - Jar archives, the local repository, dependency lists and the console
///
/// Every type here implements one of the outbound ports.
pub mod outbound;
