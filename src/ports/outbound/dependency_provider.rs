use crate::shade_diff::domain::VersionedComponent;
use crate::shared::Result;

/// DependencyProvider port supplying the project's resolved dependencies
///
/// The core consumes a flat list; it never resolves a dependency graph itself.
pub trait DependencyProvider {
    /// Returns every resolved dependency of the current project
    ///
    /// # Errors
    /// Returns an error if the dependency source cannot be read or parsed
    fn resolved_dependencies(&self) -> Result<Vec<VersionedComponent>>;
}
