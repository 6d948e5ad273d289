use crate::ports::outbound::BundleArchive;
use crate::shared::security::{validate_regular_file, validate_size, MAX_MANIFEST_ENTRY_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// ZipBundleArchive adapter reading entries from a jar on disk
///
/// This adapter implements the BundleArchive port on top of the `zip` crate.
/// The archive is opened once and entries are decompressed on demand.
pub struct ZipBundleArchive {
    location: String,
    archive: ZipArchive<File>,
}

impl ZipBundleArchive {
    /// Opens the jar at `path`
    ///
    /// # Errors
    /// Returns an error if the path is not a regular file or not a zip archive
    pub fn open(path: &Path) -> Result<Self> {
        validate_regular_file(path, "shaded jar")?;

        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.display(), e))?;
        let archive = ZipArchive::new(file).map_err(|e| {
            anyhow::anyhow!("{} is not a valid jar archive: {}", path.display(), e)
        })?;

        Ok(Self {
            location: path.display().to_string(),
            archive,
        })
    }
}

impl BundleArchive for ZipBundleArchive {
    fn location(&self) -> &str {
        &self.location
    }

    fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => anyhow::bail!("Failed to locate entry {}: {}", name, e),
        };

        let what = format!("Entry {}", name);
        validate_size(entry.size(), &what, MAX_MANIFEST_ENTRY_SIZE)?;

        // The declared size is not trusted; cap what is actually inflated
        let mut content = Vec::new();
        entry
            .take(MAX_MANIFEST_ENTRY_SIZE + 1)
            .read_to_end(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to decompress entry {}: {}", name, e))?;
        validate_size(content.len() as u64, &what, MAX_MANIFEST_ENTRY_SIZE)?;

        Ok(Some(content))
    }
}
