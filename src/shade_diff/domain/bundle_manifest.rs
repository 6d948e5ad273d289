use super::VersionedComponent;
use std::fmt;

/// Path of the artifact list written by the shade plugin
pub const ARTIFACT_LIST_ENTRY: &str = "META-INF/maven-shade-included-artifacts.list";

/// Which record inside the archive the manifest was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// Single colon-delimited list at [`ARTIFACT_LIST_ENTRY`]
    ArtifactList,
    /// One `META-INF/**/pom.properties` record per embedded component
    PomProperties,
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::ArtifactList => write!(f, "artifact list"),
            ManifestFormat::PomProperties => write!(f, "pom.properties records"),
        }
    }
}

/// BundleManifest - the components folded into one shaded archive, in archive order
///
/// Malformed lines or records that were skipped while reading are kept as
/// diagnostics so callers can report them in order.
#[derive(Debug, Clone)]
pub struct BundleManifest {
    archive: String,
    format: ManifestFormat,
    components: Vec<VersionedComponent>,
    diagnostics: Vec<String>,
}

impl BundleManifest {
    pub fn new(
        archive: String,
        format: ManifestFormat,
        components: Vec<VersionedComponent>,
        diagnostics: Vec<String>,
    ) -> Self {
        Self {
            archive,
            format,
            components,
            diagnostics,
        }
    }

    pub fn archive(&self) -> &str {
        &self.archive
    }

    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    pub fn components(&self) -> &[VersionedComponent] {
        &self.components
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
