use super::{Coordinate, VersionedComponent};
use std::collections::HashMap;

/// ProjectDependencySet aggregate - the resolved dependencies of the current project
///
/// Maps each version-independent coordinate to the single version the
/// project resolved for it.
#[derive(Debug, Clone, Default)]
pub struct ProjectDependencySet {
    versions: HashMap<Coordinate, String>,
}

impl ProjectDependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dependency, returning the version it replaced if the
    /// coordinate was already present.
    pub fn insert(&mut self, component: VersionedComponent) -> Option<String> {
        let version = component.version().to_string();
        self.versions.insert(component.coordinate().clone(), version)
    }

    pub fn version_of(&self, coordinate: &Coordinate) -> Option<&str> {
        self.versions.get(coordinate).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl FromIterator<VersionedComponent> for ProjectDependencySet {
    fn from_iter<I: IntoIterator<Item = VersionedComponent>>(iter: I) -> Self {
        let mut set = Self::new();
        for component in iter {
            set.insert(component);
        }
        set
    }
}
