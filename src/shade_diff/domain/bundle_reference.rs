use super::coordinate::DEFAULT_TYPE;
use super::Coordinate;
use crate::shared::error::ShadeDiffError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// A request to consult one already-shaded archive
///
/// Shaded archives are always resolved with the `jar` packaging type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReference {
    coordinate: Coordinate,
    version: String,
}

impl BundleReference {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
    ) -> Result<Self> {
        let coordinate = Coordinate::new(group, name, DEFAULT_TYPE, classifier)?;
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ShadeDiffError::Validation {
                message: format!("version of shaded jar {} must not be empty", coordinate),
            }
            .into());
        }
        Ok(Self {
            coordinate,
            version,
        })
    }

    pub fn group(&self) -> &str {
        self.coordinate.group()
    }

    pub fn name(&self) -> &str {
        self.coordinate.name()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.coordinate.classifier()
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

/// Renders as `group:name:version[:classifier]`, the same form accepted by `FromStr`
impl fmt::Display for BundleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group(), self.name(), self.version)?;
        if let Some(classifier) = self.classifier() {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

impl FromStr for BundleReference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, name, version] => Self::new(*group, *name, *version, None),
            [group, name, version, classifier] => {
                Self::new(*group, *name, *version, Some(classifier.to_string()))
            }
            _ => Err(ShadeDiffError::Validation {
                message: format!(
                    "Invalid shaded jar reference '{}'. Expected groupId:artifactId:version[:classifier]",
                    s
                ),
            }
            .into()),
        }
    }
}
