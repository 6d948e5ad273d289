use super::ManifestParser;
use crate::ports::outbound::BundleArchive;
use crate::shade_diff::domain::{BundleManifest, ManifestFormat, ARTIFACT_LIST_ENTRY};
use crate::shared::error::ShadeDiffError;
use crate::shared::Result;

const POM_PROPERTIES_PREFIX: &str = "META-INF/";
const POM_PROPERTIES_SUFFIX: &str = "/pom.properties";

/// ManifestReader service extracting the embedded component list of a shaded archive
///
/// The artifact list written by the shade plugin is preferred. Archives
/// without it fall back to scanning every `META-INF/**/pom.properties` record.
pub struct ManifestReader;

impl ManifestReader {
    /// Reads the bundle manifest of `archive`
    ///
    /// # Errors
    /// - `ManifestMissing` if neither record format is present
    /// - `ManifestUnreadable` if a present entry cannot be read
    /// - `MalformedEntry` if a present entry is not valid UTF-8
    pub fn read<A: BundleArchive + ?Sized>(archive: &mut A) -> Result<BundleManifest> {
        if let Some(content) = Self::read_text(archive, ARTIFACT_LIST_ENTRY)? {
            let location = archive.location().to_string();
            let (components, diagnostics) = ManifestParser::parse_artifact_list(&content, &location);
            return Ok(BundleManifest::new(
                location,
                ManifestFormat::ArtifactList,
                components,
                diagnostics,
            ));
        }

        Self::read_pom_properties(archive)
    }

    fn read_pom_properties<A: BundleArchive + ?Sized>(archive: &mut A) -> Result<BundleManifest> {
        let entries: Vec<String> = archive
            .entry_names()
            .into_iter()
            .filter(|name| Self::is_pom_properties(name))
            .collect();

        if entries.is_empty() {
            return Err(ShadeDiffError::ManifestMissing {
                archive: archive.location().to_string(),
                expected: format!(
                    "{} or {}*{}",
                    ARTIFACT_LIST_ENTRY, POM_PROPERTIES_PREFIX, POM_PROPERTIES_SUFFIX
                ),
            }
            .into());
        }

        let mut components = Vec::new();
        let mut diagnostics = Vec::new();

        for entry in &entries {
            // Listed a moment ago, so a vanished entry is treated like an empty record
            let content = Self::read_text(archive, entry)?.unwrap_or_default();
            match ManifestParser::parse_pom_properties(&content) {
                Ok(component) => components.push(component),
                Err(e) => diagnostics.push(format!(
                    "Invalid pom.properties record {} in {}, skipping: {}",
                    entry,
                    archive.location(),
                    e
                )),
            }
        }

        Ok(BundleManifest::new(
            archive.location().to_string(),
            ManifestFormat::PomProperties,
            components,
            diagnostics,
        ))
    }

    fn is_pom_properties(name: &str) -> bool {
        name.len() > POM_PROPERTIES_PREFIX.len() + POM_PROPERTIES_SUFFIX.len()
            && name.starts_with(POM_PROPERTIES_PREFIX)
            && name.ends_with(POM_PROPERTIES_SUFFIX)
    }

    /// Reads and decodes one entry, mapping failures onto the manifest error taxonomy
    fn read_text<A: BundleArchive + ?Sized>(archive: &mut A, entry: &str) -> Result<Option<String>> {
        let bytes = archive.read_entry(entry).map_err(|e| ShadeDiffError::ManifestUnreadable {
            archive: archive.location().to_string(),
            entry: entry.to_string(),
            details: e.to_string(),
        })?;

        let Some(bytes) = bytes else {
            return Ok(None);
        };

        let text = String::from_utf8(bytes).map_err(|e| ShadeDiffError::MalformedEntry {
            archive: archive.location().to_string(),
            entry: entry.to_string(),
            details: format!("content is not valid UTF-8: {}", e),
        })?;

        Ok(Some(text))
    }
}
