use shade_diff::prelude::*;

/// Mock DependencyProvider returning a fixed dependency list
pub struct MockDependencyProvider {
    pub components: Vec<VersionedComponent>,
    pub should_fail: bool,
}

impl MockDependencyProvider {
    /// Builds the provider from `group:name:type:version` strings
    pub fn new(dependencies: &[&str]) -> Self {
        let components = dependencies
            .iter()
            .map(|dependency| {
                let fields: Vec<&str> = dependency.split(':').collect();
                let coordinate = Coordinate::new(fields[0], fields[1], fields[2], None).unwrap();
                VersionedComponent::new(coordinate, fields[3]).unwrap()
            })
            .collect();
        Self {
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            components: Vec::new(),
            should_fail: true,
        }
    }
}

impl DependencyProvider for MockDependencyProvider {
    fn resolved_dependencies(&self) -> Result<Vec<VersionedComponent>> {
        if self.should_fail {
            anyhow::bail!("Mock dependency resolution failure");
        }
        Ok(self.components.clone())
    }
}
