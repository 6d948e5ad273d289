use super::MemoryArchive;
use shade_diff::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock ArchiveResolver serving MemoryArchives keyed by reference
#[derive(Default)]
pub struct MockArchiveResolver {
    archives: HashMap<String, MemoryArchive>,
    pub resolved: RefCell<Vec<String>>,
}

impl MockArchiveResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archive(mut self, reference: &str, archive: MemoryArchive) -> Self {
        self.archives.insert(reference.to_string(), archive);
        self
    }

    /// Registers an archive whose artifact list holds `lines`
    pub fn with_artifact_list(self, reference: &str, lines: &[&str]) -> Self {
        let archive = MemoryArchive::new(&format!("{}.jar", reference)).with_artifact_list(lines);
        self.with_archive(reference, archive)
    }

    pub fn resolved_references(&self) -> Vec<String> {
        self.resolved.borrow().clone()
    }
}

impl ArchiveResolver for MockArchiveResolver {
    type Archive = MemoryArchive;

    fn resolve(&self, reference: &BundleReference) -> Result<MemoryArchive> {
        let key = reference.to_string();
        self.resolved.borrow_mut().push(key.clone());
        match self.archives.get(&key) {
            Some(archive) => Ok(archive.clone()),
            None => anyhow::bail!("artifact {} not found in mock repository", key),
        }
    }
}
