use crate::ports::outbound::BundleArchive;
use crate::shade_diff::domain::BundleReference;
use crate::shared::Result;

/// ArchiveResolver port for turning a bundle reference into an archive
///
/// Downloading, caching and checksum verification are the implementation's
/// concern. The core calls `resolve` once per reference and never retries.
pub trait ArchiveResolver {
    type Archive: BundleArchive;

    /// Resolves the archive named by `reference`
    ///
    /// # Errors
    /// Returns an error if the archive cannot be located or opened
    fn resolve(&self, reference: &BundleReference) -> Result<Self::Archive>;
}
