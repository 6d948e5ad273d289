use crate::shared::error::ShadeDiffError;
use crate::shared::Result;
use std::fmt;

/// Default packaging type when none is recorded
pub const DEFAULT_TYPE: &str = "jar";

/// Maximum length for a single coordinate segment (security limit)
const MAX_SEGMENT_LENGTH: usize = 255;

fn validate_segment(value: &str, label: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ShadeDiffError::Validation {
            message: format!("{} must not be empty", label),
        }
        .into());
    }

    if value.len() > MAX_SEGMENT_LENGTH {
        return Err(ShadeDiffError::Validation {
            message: format!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                label,
                value.len(),
                MAX_SEGMENT_LENGTH
            ),
        }
        .into());
    }

    // ':' is the field separator of every textual coordinate form
    if value.chars().any(|c| c == ':' || c.is_whitespace()) {
        return Err(ShadeDiffError::Validation {
            message: format!(
                "{} '{}' must not contain ':' or whitespace",
                label, value
            ),
        }
        .into());
    }

    Ok(())
}

/// Version-independent identity of a dependency
///
/// Two coordinates are equal when group, name, type and classifier all match.
/// An empty classifier is normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    group: String,
    name: String,
    artifact_type: String,
    classifier: Option<String>,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        artifact_type: impl Into<String>,
        classifier: Option<String>,
    ) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        let artifact_type = artifact_type.into();
        let classifier = classifier.filter(|c| !c.is_empty());

        validate_segment(&group, "group")?;
        validate_segment(&name, "name")?;
        validate_segment(&artifact_type, "type")?;
        if let Some(c) = classifier.as_deref() {
            validate_segment(c, "classifier")?;
        }

        Ok(Self {
            group,
            name,
            artifact_type,
            classifier,
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Returns the `group:name:*` pattern that excludes every variant of this coordinate
    pub fn exclusion_pattern(&self) -> String {
        format!("{}:{}:*", self.group, self.name)
    }
}

/// Renders as `group:name:type[:classifier]`
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.artifact_type)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

/// A coordinate pinned to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedComponent {
    coordinate: Coordinate,
    version: String,
}

impl VersionedComponent {
    pub fn new(coordinate: Coordinate, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        validate_segment(&version, "version")?;
        Ok(Self {
            coordinate,
            version,
        })
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for VersionedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.coordinate, self.version)
    }
}
