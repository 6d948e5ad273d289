use crate::adapters::outbound::archive::ZipBundleArchive;
use crate::ports::outbound::ArchiveResolver;
use crate::shade_diff::domain::BundleReference;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LocalRepositoryResolver adapter locating shaded jars in a Maven-layout repository
///
/// Resolves `<root>/<group as path>/<name>/<version>/<name>-<version>[-<classifier>].jar`.
/// Nothing is downloaded; the jar must already be installed.
pub struct LocalRepositoryResolver {
    root: PathBuf,
}

impl LocalRepositoryResolver {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default location of the local repository (`~/.m2/repository`)
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".m2").join("repository"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Computes where `reference` lives inside the repository
    pub fn artifact_path(&self, reference: &BundleReference) -> PathBuf {
        let mut path = self.root.clone();
        for segment in reference.group().split('.') {
            path.push(segment);
        }
        path.push(reference.name());
        path.push(reference.version());

        let file_name = match reference.classifier() {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                reference.name(),
                reference.version(),
                classifier,
                reference.coordinate().artifact_type()
            ),
            None => format!(
                "{}-{}.{}",
                reference.name(),
                reference.version(),
                reference.coordinate().artifact_type()
            ),
        };
        path.push(file_name);
        path
    }
}

impl ArchiveResolver for LocalRepositoryResolver {
    type Archive = ZipBundleArchive;

    fn resolve(&self, reference: &BundleReference) -> Result<ZipBundleArchive> {
        let path = self.artifact_path(reference);
        if !path.exists() {
            anyhow::bail!(
                "{} does not exist in local repository {}",
                path.display(),
                self.root.display()
            );
        }
        ZipBundleArchive::open(&path)
    }
}
