pub mod bundle_manifest;
pub mod bundle_reference;
pub mod coordinate;
pub mod exclusion_set;
pub mod project_dependencies;

pub use bundle_manifest::{BundleManifest, ManifestFormat, ARTIFACT_LIST_ENTRY};
pub use bundle_reference::BundleReference;
pub use coordinate::{Coordinate, VersionedComponent, DEFAULT_TYPE};
pub use exclusion_set::ExclusionSet;
pub use project_dependencies::ProjectDependencySet;
