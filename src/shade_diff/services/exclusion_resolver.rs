use crate::shade_diff::domain::{BundleManifest, ExclusionSet, ProjectDependencySet, VersionedComponent};

/// A component the project also depends on, but at a different version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    pub component: VersionedComponent,
    pub project_version: String,
}

/// Outcome of folding one manifest into an exclusion set
#[derive(Debug, Clone, Default)]
pub struct ManifestDiff {
    /// Patterns added by this manifest, in manifest order
    pub added: Vec<String>,
    /// Components kept in the project's own bundle because versions diverge
    pub mismatched: Vec<VersionMismatch>,
}

/// ExclusionResolver service for reconciling project dependencies with shaded archives
///
/// Pure business logic: a component is excluded only when the project
/// depends on the same coordinate at exactly the same version string.
pub struct ExclusionResolver;

impl ExclusionResolver {
    /// Folds `manifest` into `excludes`
    ///
    /// # Arguments
    /// * `project` - The project's resolved dependencies
    /// * `manifest` - Components embedded in that shaded jar
    /// * `excludes` - Running exclusion set, extended in place
    pub fn apply(
        project: &ProjectDependencySet,
        manifest: &BundleManifest,
        excludes: &mut ExclusionSet,
    ) -> ManifestDiff {
        let mut diff = ManifestDiff::default();

        for component in manifest.components() {
            let coordinate = component.coordinate();

            let Some(project_version) = project.version_of(coordinate) else {
                continue;
            };

            if project_version == component.version() {
                if excludes.insert(coordinate) {
                    diff.added.push(coordinate.exclusion_pattern());
                }
            } else {
                diff.mismatched.push(VersionMismatch {
                    component: component.clone(),
                    project_version: project_version.to_string(),
                });
            }
        }

        diff
    }
}
