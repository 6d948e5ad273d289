/// Domain layer - value objects and the pure services that reconcile
/// a project's dependencies against the contents of shaded archives.
pub mod domain;
pub mod services;
